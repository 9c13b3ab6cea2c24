//! In-scope uniqueness.

use std::collections::{BTreeSet, HashMap};

use gridlock_core::Point;

use super::Violation;
use crate::validation::{InvalidReason, ValidationError};

/// Forbids a value from appearing more than once within one scope.
///
/// The scope — one row, column, or box of nine cells — is implicit:
/// whatever set of cells routes its writes here. The registry maps each
/// placed value to the coordinates currently holding it, so duplicates
/// introduced by unvalidated givens are representable and reportable.
#[derive(Debug, Default, PartialEq)]
pub struct UniquenessConstraint {
    placed: HashMap<i32, BTreeSet<Point>>,
}

impl UniquenessConstraint {
    /// Creates a uniqueness constraint with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `value` is still free in this scope.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::Duplicate`] if the value is already placed
    /// anywhere in the scope.
    pub fn evaluate(&self, value: i32) -> Result<(), Violation> {
        match self.placed.get(&value) {
            Some(points) if !points.is_empty() => Err(Violation::Duplicate),
            _ => Ok(()),
        }
    }

    /// Reports every coordinate participating in a duplicated value.
    ///
    /// A value mapped to more than one coordinate contributes all of
    /// those coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with the offending cells.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let points: BTreeSet<Point> = self
            .placed
            .values()
            .filter(|points| points.len() > 1)
            .flatten()
            .copied()
            .collect();
        if points.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(InvalidReason::Duplicate, points))
        }
    }

    /// Registers `value` at `point`.
    pub fn add_value(&mut self, value: i32, point: Point) {
        self.placed.entry(value).or_default().insert(point);
    }

    /// Unregisters `value` at `point`; absent entries are a no-op.
    pub fn remove_value(&mut self, value: i32, point: Point) {
        if let Some(points) = self.placed.get_mut(&value) {
            points.remove(&point);
        }
    }
}
