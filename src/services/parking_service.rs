//! Parking lot service - the command interpreter behind the `parking` binary

use crate::constants::messages;
use crate::models::{Action, Car, Spots};

/// A parking lot that answers commands with printable lines
#[derive(Debug)]
pub struct ParkingService {
    spots: Option<Spots>,
    open: bool,
}

impl Default for ParkingService {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkingService {
    pub fn new() -> Self {
        Self {
            spots: None,
            open: true,
        }
    }

    /// False once `exit` has been handled
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handle one raw input line. Blank lines produce no output.
    pub fn execute_line(&mut self, line: &str) -> Vec<String> {
        if line.trim().is_empty() {
            return Vec::new();
        }
        self.execute(Action::parse(line))
    }

    pub fn execute(&mut self, action: Action) -> Vec<String> {
        tracing::debug!(?action, "executing");

        match action {
            Action::Create(size) => {
                self.spots = Some(Spots::with_size(size));
                vec![format!("Created a parking lot with {} spots.", size)]
            }
            Action::Exit => {
                self.open = false;
                Vec::new()
            }
            Action::WrongInput(input) => vec![format!("Input Error: {}", input)],
            Action::Park(car) => self.with_lot(|spots| vec![Self::park(spots, car)]),
            Action::Leave(id) => self.with_lot(|spots| {
                vec![match spots.free(id) {
                    Some(_) => format!("Spot {} is free.", id),
                    None => format!("There is no car in spot {}.", id),
                }]
            }),
            Action::Status => self.with_lot(|spots| Self::status(spots)),
            Action::RegByColor(color) => self.with_lot(|spots| {
                let regs: Vec<&str> = spots
                    .occupied()
                    .filter(|(_, car)| car.has_color(&color))
                    .map(|(_, car)| car.registration.as_str())
                    .collect();
                vec![join_or(regs, || no_color_message(&color))]
            }),
            Action::SpotByColor(color) => self.with_lot(|spots| {
                let ids: Vec<String> = spots
                    .occupied()
                    .filter(|(_, car)| car.has_color(&color))
                    .map(|(id, _)| id.to_string())
                    .collect();
                vec![join_or(ids, || no_color_message(&color))]
            }),
            Action::SpotByReg(reg) => self.with_lot(|spots| {
                let ids: Vec<String> = spots
                    .occupied()
                    .filter(|(_, car)| car.has_registration(&reg))
                    .map(|(id, _)| id.to_string())
                    .collect();
                vec![join_or(ids, || {
                    format!("No cars with registration number {} were found.", reg)
                })]
            }),
        }
    }

    /// Run `f` against the current lot, or complain that there is none
    fn with_lot<F>(&mut self, f: F) -> Vec<String>
    where
        F: FnOnce(&mut Spots) -> Vec<String>,
    {
        match self.spots.as_mut() {
            Some(spots) => f(spots),
            None => vec![messages::NOT_CREATED.to_string()],
        }
    }

    fn park(spots: &mut Spots, car: Car) -> String {
        let color = car.color.clone();
        match spots.park(car) {
            Some(id) => format!("{} car parked in spot {}.", color, id),
            None => messages::LOT_FULL.to_string(),
        }
    }

    fn status(spots: &Spots) -> Vec<String> {
        if spots.is_empty() {
            return vec![messages::LOT_EMPTY.to_string()];
        }
        spots
            .occupied()
            .map(|(id, car)| format!("{} {} {}", id, car.registration, car.color))
            .collect()
    }
}

fn no_color_message(color: &str) -> String {
    format!("No Cars with color {} were found.", color)
}

fn join_or<S, F>(items: Vec<S>, empty: F) -> String
where
    S: AsRef<str>,
    F: FnOnce() -> String,
{
    if items.is_empty() {
        empty()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(messages::LIST_SEPARATOR)
    }
}
