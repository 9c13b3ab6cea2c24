//! A single board cell and its constraint wiring.

use gridlock_core::{EMPTY, Point};
use tinyvec::ArrayVec;

use crate::constraint::{ConstraintArena, ConstraintId};

/// One board position, its current value, and the constraints governing it.
///
/// All registry mutation routes through the cell: [`write`](Self::write)
/// commits a value into every constraint and [`clear`](Self::clear)
/// exactly undoes it, which is the discipline that keeps the shared
/// registries in sync with the grid during backtracking. Writes perform
/// no legality check of their own — callers probe
/// [`satisfies`](Self::satisfies) first, so the search can test
/// candidates cheaply before committing.
#[derive(Debug, PartialEq)]
pub struct Cell {
    point: Point,
    value: i32,
    constraints: ArrayVec<[ConstraintId; 4]>,
}

impl Cell {
    /// Creates an empty cell governed by the given constraints.
    pub fn new(point: Point, constraints: impl IntoIterator<Item = ConstraintId>) -> Self {
        Self {
            point,
            value: EMPTY,
            constraints: constraints.into_iter().collect(),
        }
    }

    /// Returns the cell's position.
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Returns the cell's current value (`0` when empty).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Reports whether the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == EMPTY
    }

    /// Commits `value` into every governing constraint, then stores it.
    pub fn write(&mut self, value: i32, arena: &mut ConstraintArena) {
        for &id in &self.constraints {
            arena[id].add_value(value, self.point);
        }
        self.value = value;
    }

    /// Removes the current value from every governing constraint and
    /// empties the cell.
    ///
    /// Exactly inverts the matching [`write`](Self::write); clearing an
    /// already empty cell leaves the registries untouched.
    pub fn clear(&mut self, arena: &mut ConstraintArena) {
        for &id in &self.constraints {
            arena[id].remove_value(self.value, self.point);
        }
        self.value = EMPTY;
    }

    /// Reports whether placing `value` here would violate any constraint.
    ///
    /// Point-scoped constraints are evaluated at this cell's position,
    /// scope-only constraints against their whole scope. Nothing is
    /// mutated; the first violation wins.
    #[must_use]
    pub fn satisfies(&self, value: i32, arena: &ConstraintArena) -> bool {
        self.constraints.iter().all(|&id| {
            let constraint = &arena[id];
            let outcome = if constraint.is_point_scoped() {
                constraint.evaluate_at(value, self.point)
            } else {
                constraint.evaluate(value)
            };
            outcome.is_ok()
        })
    }
}
