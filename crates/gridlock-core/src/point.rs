//! Board position types.

use serde::{Deserialize, Serialize};

use crate::{DIMENSION, TOTAL_CELLS};

/// A position on the 9×9 board.
///
/// A point is an immutable `(row, column)` pair with both components in
/// the range 0-8. The index of the 3×3 box containing the point is
/// derived from the pair and can never be set independently.
///
/// Points are cheap to copy, hashable, and totally ordered (row-major),
/// which keeps error reports and registry iteration deterministic.
///
/// # Examples
///
/// ```
/// use gridlock_core::Point;
///
/// let point = Point::new(4, 7);
/// assert_eq!(point.row(), 4);
/// assert_eq!(point.col(), 7);
/// assert_eq!(point.box_index(), 5);
/// assert_eq!(point.cell_index(), 43);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Point {
    row: u8,
    col: u8,
}

impl Point {
    /// Every point on the board in row-major order.
    pub const ALL: [Self; TOTAL_CELLS] = {
        let mut all = [Self { row: 0, col: 0 }; TOTAL_CELLS];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < TOTAL_CELLS {
            all[i] = Self {
                row: (i / DIMENSION) as u8,
                col: (i % DIMENSION) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a point from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row out of range");
        assert!(col < 9, "col out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this point (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.row / 3) + self.col / 3
    }

    /// Returns this point's row-major linear index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * DIMENSION + self.col as usize
    }

    /// Creates a point from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < TOTAL_CELLS, "cell index out of range");
        Self {
            row: (index / DIMENSION) as u8,
            col: (index % DIMENSION) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn box_index_derivation() {
        assert_eq!(Point::new(0, 0).box_index(), 0);
        assert_eq!(Point::new(0, 8).box_index(), 2);
        assert_eq!(Point::new(4, 4).box_index(), 4);
        assert_eq!(Point::new(8, 0).box_index(), 6);
        assert_eq!(Point::new(8, 8).box_index(), 8);
        assert_eq!(Point::new(7, 6).box_index(), 8);
        assert_eq!(Point::new(2, 3).box_index(), 1);
    }

    #[test]
    fn all_is_row_major() {
        assert_eq!(Point::ALL.len(), TOTAL_CELLS);
        for (i, point) in Point::ALL.iter().enumerate() {
            assert_eq!(point.cell_index(), i);
            assert_eq!(Point::from_cell_index(i), *point);
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Point::new(2, 5).to_string(), "(2, 5)");
    }

    #[test]
    fn serde_round_trip() {
        let point = Point::new(3, 1);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"row":3,"col":1}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }

    #[test]
    #[should_panic(expected = "row out of range")]
    fn new_rejects_large_row() {
        let _ = Point::new(9, 0);
    }

    proptest! {
        #[test]
        fn box_contains_point(row in 0_u8..9, col in 0_u8..9) {
            let point = Point::new(row, col);
            let box_index = point.box_index();
            // The box's top-left corner spans rows 3*(b/3).. and
            // columns 3*(b%3)..; the point must fall inside it.
            let top = 3 * (box_index / 3);
            let left = 3 * (box_index % 3);
            prop_assert!((top..top + 3).contains(&row));
            prop_assert!((left..left + 3).contains(&col));
        }
    }
}
