//! Parking Judge - stage grading for the Parking Lot exercise
//!
//! This library runs a student's program, captures what it prints and
//! judges the reply against the stage's checker. It also holds the
//! parking lot simulator that the later stages of the exercise build up to.
//!
//! # Architecture
//!
//! - **Judge**: stage tests, program execution, verdicts
//! - **Services**: the parking lot command interpreter
//! - **Models**: cars, spots and parsed commands

pub mod config;
pub mod constants;
pub mod error;
pub mod judge;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
