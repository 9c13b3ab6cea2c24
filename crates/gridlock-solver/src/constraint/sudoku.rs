//! The classic sudoku rules as one constraint.

use std::array;

use gridlock_core::{DIMENSION, Point};

use super::{UniquenessConstraint, Violation};
use crate::validation::{ValidationAccumulator, ValidationError};

/// The three classic uniqueness scopes bundled as a single point-scoped
/// constraint.
///
/// Holds one [`UniquenessConstraint`] per row, per column, and per box
/// (27 in total) and routes each value/coordinate through the three
/// scopes containing the coordinate. One instance is shared by all 81
/// cells of a board; it carries no state of its own beyond its
/// sub-constraints.
#[derive(Debug, PartialEq)]
pub struct SudokuConstraint {
    rows: [UniquenessConstraint; DIMENSION],
    cols: [UniquenessConstraint; DIMENSION],
    boxes: [UniquenessConstraint; DIMENSION],
}

impl SudokuConstraint {
    /// Creates the constraint with all 27 scopes empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: array::from_fn(|_| UniquenessConstraint::new()),
            cols: array::from_fn(|_| UniquenessConstraint::new()),
            boxes: array::from_fn(|_| UniquenessConstraint::new()),
        }
    }

    /// Checks `value` against the row, column, and box containing `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::Duplicate`] if the value is already present
    /// in any of the three scopes.
    pub fn evaluate_at(&self, value: i32, point: Point) -> Result<(), Violation> {
        self.rows[usize::from(point.row())].evaluate(value)?;
        self.cols[usize::from(point.col())].evaluate(value)?;
        self.boxes[usize::from(point.box_index())].evaluate(value)
    }

    /// Unions the violations of all 27 scopes, deduplicating coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every duplicated cell.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut accumulator = ValidationAccumulator::new();
        for scope in self.rows.iter().chain(&self.cols).chain(&self.boxes) {
            accumulator.record(scope.validate());
        }
        accumulator.finish()
    }

    /// Registers `value` with the three scopes containing `point`.
    pub fn add_value(&mut self, value: i32, point: Point) {
        self.rows[usize::from(point.row())].add_value(value, point);
        self.cols[usize::from(point.col())].add_value(value, point);
        self.boxes[usize::from(point.box_index())].add_value(value, point);
    }

    /// Unregisters `value` from the three scopes containing `point`.
    pub fn remove_value(&mut self, value: i32, point: Point) {
        self.rows[usize::from(point.row())].remove_value(value, point);
        self.cols[usize::from(point.col())].remove_value(value, point);
        self.boxes[usize::from(point.box_index())].remove_value(value, point);
    }
}

impl Default for SudokuConstraint {
    fn default() -> Self {
        Self::new()
    }
}
