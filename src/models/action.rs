//! Commands understood by the parking lot

use crate::constants::commands;
use crate::models::car::Car;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(usize),
    Park(Car),
    Leave(usize),
    Status,
    RegByColor(String),
    SpotByColor(String),
    SpotByReg(String),
    Exit,
    /// Anything that could not be understood, kept verbatim
    WrongInput(String),
}

impl Action {
    /// Parse a non-blank input line. Words are separated by single spaces.
    pub fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split(' ').collect();
        let arg = |n: usize| words.get(n).copied().filter(|w| !w.is_empty());
        let number = |n: usize| arg(n).and_then(|w| w.parse::<usize>().ok());
        // Lot sizes stay within what a 32-bit counter can hold
        let size = |n: usize| arg(n).and_then(|w| w.parse::<u32>().ok());

        let action = match words[0] {
            commands::CREATE => size(1).map(|n| Action::Create(n as usize)),
            commands::PARK => arg(1)
                .zip(arg(2))
                .map(|(reg, color)| Action::Park(Car::new(reg, color))),
            commands::LEAVE => number(1).map(Action::Leave),
            commands::STATUS => Some(Action::Status),
            commands::REG_BY_COLOR => arg(1).map(|c| Action::RegByColor(c.to_string())),
            commands::SPOT_BY_COLOR => arg(1).map(|c| Action::SpotByColor(c.to_string())),
            commands::SPOT_BY_REG => arg(1).map(|r| Action::SpotByReg(r.to_string())),
            commands::EXIT => Some(Action::Exit),
            _ => None,
        };

        action.unwrap_or_else(|| Action::WrongInput(line.to_string()))
    }
}
