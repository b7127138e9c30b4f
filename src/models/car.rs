//! Car model

/// A parked car
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub registration: String,
    pub color: String,
}

impl Car {
    pub fn new(registration: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            color: color.into(),
        }
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }

    pub fn has_registration(&self, registration: &str) -> bool {
        self.registration.to_lowercase() == registration.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_ignores_case() {
        let car = Car::new("KA-01-HH-1234", "White");
        assert!(car.has_color("white"));
        assert!(car.has_color("WHITE"));
        assert!(!car.has_color("Black"));
        assert!(car.has_registration("ka-01-hh-1234"));
        assert!(!car.has_registration("KA-01-HH-9999"));
    }
}
