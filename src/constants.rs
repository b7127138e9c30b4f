//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// JUDGE DEFAULTS
// =============================================================================

/// Default wall-clock limit for one run of the program under test
pub const DEFAULT_TIME_LIMIT_MS: u64 = 15_000;

/// Default cap on captured stdout (1 MiB)
pub const DEFAULT_OUTPUT_LIMIT_BYTES: u64 = 1024 * 1024;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "parking_judge=info";

// =============================================================================
// STAGE: PARKING LOT INTRO
// =============================================================================

/// What the stage-one program must print
pub const INTRO_EXPECTED_TEXT: &str = "White car has parked.\n\
                                       Yellow car left the parking lot.\n\
                                       Green car just parked here.";

/// Feedback shown when the output does not match
pub const INTRO_WRONG_TEXT_FEEDBACK: &str = "You printed the wrong text! See the example.";

// =============================================================================
// PARKING LOT COMMANDS
// =============================================================================

pub mod commands {
    pub const PARK: &str = "park";
    pub const LEAVE: &str = "leave";
    pub const EXIT: &str = "exit";
    pub const CREATE: &str = "create";
    pub const STATUS: &str = "status";
    pub const REG_BY_COLOR: &str = "reg_by_color";
    pub const SPOT_BY_COLOR: &str = "spot_by_color";
    pub const SPOT_BY_REG: &str = "spot_by_reg";
}

// =============================================================================
// PARKING LOT MESSAGES
// =============================================================================

pub mod messages {
    pub const NOT_CREATED: &str = "Sorry, a parking lot has not been created.";
    pub const LOT_FULL: &str = "Sorry, the parking lot is full.";
    pub const LOT_EMPTY: &str = "Parking lot is empty.";

    /// Separator used when a query returns several values
    pub const LIST_SEPARATOR: &str = ", ";
}
