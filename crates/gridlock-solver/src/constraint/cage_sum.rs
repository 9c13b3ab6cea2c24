//! Killer-cage arithmetic.

use std::collections::BTreeMap;

use gridlock_core::{EMPTY, KillerCage, Point};

use super::Violation;
use crate::validation::{InvalidReason, ValidationError};

/// Requires the cells of a killer cage to sum to a fixed target.
///
/// The registry maps each cage cell to its current value (`0` for not
/// yet filled). A partially filled cage must keep its sum strictly
/// below the target — there is always at least one more digit to come —
/// while a full cage must hit the target exactly. Coordinates outside
/// the cage never violate this constraint.
#[derive(Debug, PartialEq)]
pub struct CageSumConstraint {
    target: i32,
    cells: BTreeMap<Point, i32>,
}

impl CageSumConstraint {
    /// Creates the constraint for one cage, with every cell unfilled.
    #[must_use]
    pub fn new(cage: &KillerCage) -> Self {
        Self {
            target: cage.target(),
            cells: cage.cells().iter().map(|&point| (point, EMPTY)).collect(),
        }
    }

    /// Current sum and the number of unfilled cells.
    fn current(&self) -> (i32, usize) {
        let mut sum = 0;
        let mut empties = 0;
        for &value in self.cells.values() {
            sum += value;
            if value == EMPTY {
                empties += 1;
            }
        }
        (sum, empties)
    }

    /// Decides whether `value` may be placed at `point`, replacing
    /// whatever the registry currently holds there.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::WrongCageSum`] when the placement would fill
    /// the cage with the wrong sum, or leave an unfilled cage at or
    /// above the target.
    pub fn evaluate_at(&self, value: i32, point: Point) -> Result<(), Violation> {
        let Some(&current) = self.cells.get(&point) else {
            // Not a cage cell; the constraint does not apply.
            return Ok(());
        };
        let (sum, empties) = self.current();
        let new_sum = sum - current + value;

        if empties <= 1 && new_sum != self.target {
            // Filling the last open cell must land exactly on target.
            return Err(Violation::WrongCageSum {
                want: self.target,
                got: new_sum,
            });
        }
        if empties > 1 && new_sum >= self.target {
            // Cells remain open, so the sum must stay strictly below.
            return Err(Violation::WrongCageSum {
                want: self.target,
                got: new_sum,
            });
        }
        Ok(())
    }

    /// Checks the cage's current sum against its target.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the entire cage — partial
    /// attribution is meaningless for a sum — when an unfilled cage has
    /// reached the target or a full cage has missed it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (sum, empties) = self.current();
        if empties >= 1 && sum < self.target {
            return Ok(());
        }
        if empties == 0 && sum == self.target {
            return Ok(());
        }
        Err(ValidationError::new(
            InvalidReason::WrongCageSum {
                want: self.target,
                got: sum,
            },
            self.cells.keys().copied().collect(),
        ))
    }

    /// Records `value` at `point`; points outside the cage are ignored.
    pub fn add_value(&mut self, value: i32, point: Point) {
        if let Some(slot) = self.cells.get_mut(&point) {
            *slot = value;
        }
    }

    /// Marks `point` unfilled again; points outside the cage are ignored.
    pub fn remove_value(&mut self, _value: i32, point: Point) {
        if let Some(slot) = self.cells.get_mut(&point) {
            *slot = EMPTY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cage(target: i32, points: &[Point]) -> CageSumConstraint {
        CageSumConstraint::new(&KillerCage::new(target, points.iter().copied()))
    }

    #[test]
    fn evaluate_at_partial_and_filling() {
        let (p1, p2, p3) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        let mut constraint = cage(15, &[p1, p2, p3]);

        assert_eq!(constraint.evaluate_at(1, p1), Ok(()));

        constraint.add_value(9, p1);
        // 9 + 8 = 17 >= 15 with a cell still open.
        assert!(constraint.evaluate_at(8, p2).is_err());
        // Outside the cage, anything goes.
        assert_eq!(constraint.evaluate_at(8, Point::new(8, 8)), Ok(()));

        constraint.add_value(1, p2);
        // Only 5 completes 9 + 1 + n = 15.
        for value in [2, 3, 4, 6, 7, 8, 9] {
            assert!(constraint.evaluate_at(value, p3).is_err());
        }
        assert_eq!(constraint.evaluate_at(5, p3), Ok(()));

        // Replacement accounts for the value already at the point.
        constraint.add_value(2, p3);
        assert!(constraint.evaluate_at(3, p3).is_err());
        assert_eq!(constraint.evaluate_at(5, p3), Ok(()));
    }

    #[test]
    fn two_cell_cage_boundary() {
        let (p1, p2) = (Point::new(0, 0), Point::new(0, 1));
        let constraint = cage(8, &[p1, p2]);

        // One empty cell would remain, so the sum must stay below target:
        // 8 exactly reaches it (the remaining cell cannot be 0), 7 does not.
        assert!(constraint.evaluate_at(8, p1).is_err());
        assert_eq!(constraint.evaluate_at(7, p1), Ok(()));
        assert!(constraint.evaluate_at(9, p1).is_err());
    }

    #[test]
    fn validate_transitions() {
        let points = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
        ];
        let mut constraint = cage(10, &points);

        assert!(constraint.validate().is_ok());

        // 4 + 6 reaches the target with cells still open.
        constraint.add_value(4, points[0]);
        constraint.add_value(6, points[1]);
        let err = constraint.validate().unwrap_err();
        assert_eq!(err.reason(), InvalidReason::WrongCageSum { want: 10, got: 10 });
        assert_eq!(err.points().len(), 4);

        // 4 + 9 overshoots outright.
        constraint.remove_value(6, points[1]);
        constraint.add_value(9, points[1]);
        assert!(constraint.validate().is_err());

        // 4 + 1 + 2 leaves room.
        constraint.remove_value(9, points[1]);
        constraint.add_value(1, points[1]);
        constraint.add_value(2, points[2]);
        assert!(constraint.validate().is_ok());

        // Any wrong final digit breaks the full cage.
        for value in [5, 6, 7, 8, 9] {
            constraint.add_value(value, points[3]);
            let err = constraint.validate().unwrap_err();
            assert_eq!(err.points().len(), 4);
            constraint.remove_value(value, points[3]);
        }

        // 4 + 1 + 2 + 3 lands exactly on target.
        constraint.add_value(3, points[3]);
        assert!(constraint.validate().is_ok());
    }
}
