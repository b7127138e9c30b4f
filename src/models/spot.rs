//! Parking spots

use std::collections::BTreeMap;

use crate::models::car::Car;

/// The spots of one parking lot.
///
/// Only occupied spots are stored, so a lot's size costs nothing until
/// cars arrive.
#[derive(Debug, Clone, Default)]
pub struct Spots {
    size: usize,
    taken: BTreeMap<usize, Car>,
}

impl Spots {
    /// A lot with spots `1..=size`, all free
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            taken: BTreeMap::new(),
        }
    }

    pub fn has_free_spot(&self) -> bool {
        self.taken.len() < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Park in the lowest-numbered free spot, returning its id
    pub fn park(&mut self, car: Car) -> Option<usize> {
        if !self.has_free_spot() {
            return None;
        }
        // First gap in the occupied ids, or the spot right after them
        let id = self
            .taken
            .keys()
            .zip(1..)
            .find(|(taken, expected)| **taken != *expected)
            .map_or(self.taken.len() + 1, |(_, expected)| expected);
        self.taken.insert(id, car);
        Some(id)
    }

    /// Free spot `id`. Returns the car that left, if there was one.
    pub fn free(&mut self, id: usize) -> Option<Car> {
        self.taken.remove(&id)
    }

    /// Occupied spots paired with their cars, in spot order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Car)> {
        self.taken.iter().map(|(id, car)| (*id, car))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parks_lowest_free_spot() {
        let mut spots = Spots::with_size(3);
        assert_eq!(spots.park(Car::new("A", "Red")), Some(1));
        assert_eq!(spots.park(Car::new("B", "Blue")), Some(2));
        assert_eq!(spots.free(1), Some(Car::new("A", "Red")));
        assert_eq!(spots.park(Car::new("C", "Green")), Some(1));
        assert_eq!(spots.park(Car::new("D", "Black")), Some(3));
        assert!(!spots.has_free_spot());
        assert_eq!(spots.park(Car::new("E", "White")), None);
    }

    #[test]
    fn test_fills_middle_gap() {
        let mut spots = Spots::with_size(4);
        for reg in ["A", "B", "C", "D"] {
            spots.park(Car::new(reg, "Red"));
        }
        spots.free(3);
        spots.free(2);
        assert_eq!(spots.park(Car::new("E", "Blue")), Some(2));
        assert_eq!(spots.park(Car::new("F", "Blue")), Some(3));
    }

    #[test]
    fn test_free_out_of_range() {
        let mut spots = Spots::with_size(2);
        assert_eq!(spots.free(0), None);
        assert_eq!(spots.free(3), None);
    }

    #[test]
    fn test_huge_lot_is_cheap() {
        let mut spots = Spots::with_size(u32::MAX as usize);
        assert!(spots.is_empty());
        assert_eq!(spots.park(Car::new("A", "Red")), Some(1));
    }

    #[test]
    fn test_occupied_in_order() {
        let mut spots = Spots::with_size(3);
        assert!(spots.is_empty());
        spots.park(Car::new("A", "Red"));
        spots.park(Car::new("B", "Blue"));
        spots.free(1);
        let ids: Vec<usize> = spots.occupied().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2]);
        assert!(!spots.is_empty());
    }
}
