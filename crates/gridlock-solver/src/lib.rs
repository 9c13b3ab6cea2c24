//! Constraint-based backtracking solver for classic and killer sudoku.
//!
//! The solver is organized around a small set of cooperating pieces:
//!
//! - [`constraint`]: a closed set of pluggable rules ([`Constraint`])
//!   — value bounds, in-scope uniqueness, cage sums, and the composite
//!   classic-sudoku rules — stored in a [`ConstraintArena`] owned by the
//!   solver and shared by handle among the cells they govern
//! - [`Cell`]: binds one board position to its value and the constraints
//!   that govern it; all registry mutation routes through cells
//! - [`ValidationAccumulator`]: merges violations from every constraint
//!   into one [`ValidationError`] naming every invalid cell
//! - [`Solver`]: wires a board, validates the givens, and runs a
//!   depth-first search that commits candidate values and rolls them
//!   back on dead ends
//!
//! Construction never yields a partially usable solver: malformed shapes
//! fail with [`SolverError::WrongRowCount`]/[`SolverError::WrongColumnCount`]
//! before any wiring, and invalid givens fail with the aggregate
//! validation error. An exhausted search reports [`NoSolution`], the
//! expected negative result rather than a fault.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::empty_grid;
//! use gridlock_solver::Solver;
//!
//! let mut solver = Solver::new(&empty_grid())?;
//! let solution = solver.solve()?;
//! assert_eq!(solution.len(), 9);
//! assert!(solution.iter().flatten().all(|&value| (1..=9).contains(&value)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    cell::Cell,
    constraint::{Constraint, ConstraintArena, ConstraintId, Violation},
    solver::{NoSolution, Solver, SolverError},
    validation::{InvalidReason, ValidationAccumulator, ValidationError},
};

mod cell;
pub mod constraint;
mod solver;
mod validation;
