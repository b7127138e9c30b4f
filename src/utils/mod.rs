//! Utility functions

pub mod logging;
pub mod text;
pub mod time;

pub use text::trim_control;
pub use time::format_milliseconds;
