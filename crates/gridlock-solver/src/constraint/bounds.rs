//! Value range checking.

use std::collections::{BTreeMap, BTreeSet};

use gridlock_core::{EMPTY, MAX_DIGIT, MIN_DIGIT, Point};

use super::Violation;
use crate::validation::{InvalidReason, ValidationError};

/// Checks that placed values lie in `1..=9`.
///
/// The check itself is stateless, but every placement is recorded so
/// that [`validate`](Self::validate) can name each out-of-range cell.
/// One instance is shared by all 81 cells of a board.
#[derive(Debug, Default, PartialEq)]
pub struct BoundsConstraint {
    values: BTreeMap<Point, i32>,
}

fn in_range(value: i32) -> bool {
    value == EMPTY || (MIN_DIGIT..=MAX_DIGIT).contains(&value)
}

impl BoundsConstraint {
    /// Creates a bounds constraint with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a candidate value against the allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::OutOfRange`] unless the value is empty or a
    /// digit `1..=9`.
    pub fn evaluate(&self, value: i32) -> Result<(), Violation> {
        if in_range(value) {
            Ok(())
        } else {
            Err(Violation::OutOfRange)
        }
    }

    /// Reports every recorded placement that lies outside the range.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each out-of-range cell.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let points: BTreeSet<Point> = self
            .values
            .iter()
            .filter(|&(_, &value)| !in_range(value))
            .map(|(&point, _)| point)
            .collect();
        if points.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(InvalidReason::OutOfRange, points))
        }
    }

    /// Records `value` at `point`.
    pub fn add_value(&mut self, value: i32, point: Point) {
        self.values.insert(point, value);
    }

    /// Forgets whatever is recorded at `point`.
    pub fn remove_value(&mut self, _value: i32, point: Point) {
        self.values.remove(&point);
    }
}
