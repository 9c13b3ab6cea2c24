//! Killer cage configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Point;

/// A killer cage: a set of cells whose digits must sum to a target.
///
/// Cages are pure configuration — the arithmetic that enforces them
/// lives in the solver. Repetition-freedom inside a cage comes from the
/// ordinary row/column/box rules that already cover the same cells, so
/// a cage only carries its target and its cell set.
///
/// # Examples
///
/// ```
/// use gridlock_core::{KillerCage, Point};
///
/// let cage = KillerCage::new(15, [Point::new(0, 0), Point::new(0, 1)]);
/// assert_eq!(cage.target(), 15);
/// assert!(cage.contains(Point::new(0, 1)));
/// assert!(!cage.contains(Point::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillerCage {
    target: i32,
    cells: BTreeSet<Point>,
}

impl KillerCage {
    /// Creates a cage from a target sum and the cells it covers.
    ///
    /// Duplicate points collapse into one cell.
    #[must_use]
    pub fn new(target: i32, cells: impl IntoIterator<Item = Point>) -> Self {
        Self {
            target,
            cells: cells.into_iter().collect(),
        }
    }

    /// Returns the sum the cage's cells must reach.
    #[must_use]
    pub const fn target(&self) -> i32 {
        self.target
    }

    /// Returns the cells covered by the cage.
    #[must_use]
    pub const fn cells(&self) -> &BTreeSet<Point> {
        &self.cells
    }

    /// Reports whether `point` is one of the cage's cells.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// Returns the number of cells in the cage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the cage covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_points_collapse() {
        let point = Point::new(2, 2);
        let cage = KillerCage::new(9, [point, point, Point::new(2, 3)]);
        assert_eq!(cage.len(), 2);
    }

    #[test]
    fn serde_round_trip() {
        let cage = KillerCage::new(12, [Point::new(0, 0), Point::new(1, 0)]);
        let json = serde_json::to_string(&cage).unwrap();
        let back: KillerCage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cage);
    }
}
