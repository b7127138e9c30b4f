//! Domain models
//!
//! Cars, spots and the commands that move them around.

pub mod action;
pub mod car;
pub mod spot;

pub use action::Action;
pub use car::Car;
pub use spot::Spots;
