//! Core value types for the gridlock sudoku solver.
//!
//! This crate provides the leaf types shared by the solver and its
//! front ends:
//!
//! - [`point`]: the [`Point`] coordinate model, a board position with
//!   derived row/column/box indices
//! - [`cage`]: the [`KillerCage`] configuration type describing a
//!   cage-sum region of a killer sudoku puzzle
//!
//! Boards cross API boundaries in a plain *grid* representation: nine
//! rows of nine `i32` values, where [`EMPTY`] (`0`) marks an empty cell
//! and `1..=9` a given or solved digit. The representation is
//! deliberately loose — the solver validates shape and value ranges and
//! reports every offending cell, so nothing is rejected here.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{DIMENSION, Point, empty_grid};
//!
//! let grid = empty_grid();
//! assert_eq!(grid.len(), DIMENSION);
//!
//! let point = Point::new(4, 7);
//! assert_eq!(point.box_index(), 5);
//! ```

pub mod cage;
pub mod point;

pub use self::{cage::KillerCage, point::Point};

/// Number of rows, columns, and 3×3 boxes on a board.
pub const DIMENSION: usize = 9;

/// Total number of cells on a board.
pub const TOTAL_CELLS: usize = DIMENSION * DIMENSION;

/// The cell value marking an empty cell.
pub const EMPTY: i32 = 0;

/// The smallest digit that may be placed on a board.
pub const MIN_DIGIT: i32 = 1;

/// The largest digit that may be placed on a board.
pub const MAX_DIGIT: i32 = 9;

/// Creates an empty 9×9 grid in the external representation.
///
/// # Examples
///
/// ```
/// use gridlock_core::{EMPTY, empty_grid};
///
/// let grid = empty_grid();
/// assert!(grid.iter().flatten().all(|&value| value == EMPTY));
/// ```
#[must_use]
pub fn empty_grid() -> Vec<Vec<i32>> {
    vec![vec![EMPTY; DIMENSION]; DIMENSION]
}
