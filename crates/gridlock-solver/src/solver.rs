//! Board construction and the backtracking search.

use std::collections::HashMap;

use gridlock_core::{DIMENSION, EMPTY, KillerCage, MAX_DIGIT, MIN_DIGIT, Point};
use log::debug;

use crate::{
    cell::Cell,
    constraint::{
        BoundsConstraint, CageSumConstraint, Constraint, ConstraintArena, ConstraintId,
        SudokuConstraint,
    },
    validation::{ValidationAccumulator, ValidationError},
};

/// An error constructing a [`Solver`].
///
/// Structural errors are checked before any constraint wiring and never
/// leave a partially usable solver behind; validation errors carry every
/// offending coordinate at once.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The input grid does not have exactly 9 rows.
    #[display("expected 9 rows; found {found}")]
    WrongRowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// A row of the input grid does not have exactly 9 columns.
    #[display("expected 9 columns in row {row}; found {found}")]
    WrongColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Number of columns supplied in that row.
        found: usize,
    },
    /// A cell was assigned to more than one cage.
    #[display("cell {point} belongs to more than one cage")]
    OverlappingCages {
        /// The doubly caged cell.
        point: Point,
    },
    /// One or more givens violate a constraint.
    #[from]
    Invalid(ValidationError),
}

/// Returned by [`Solver::solve`] when no legal complete assignment exists.
///
/// This is the expected negative result of a search over a valid board,
/// not a fault: construction already vouched for the givens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no solution exists for the given board")]
pub struct NoSolution;

/// A 9×9 board of cells plus the constraints wired across them.
///
/// Construction wires one shared [`SudokuConstraint`] and one shared
/// [`BoundsConstraint`] into every cell, an optional [`CageSumConstraint`]
/// per cage, writes the givens, and validates the whole board before
/// handing the solver out. [`solve`](Self::solve) then runs a
/// depth-first search over the empty cells, mutating the shared
/// constraint registries in place and rolling back on dead ends.
///
/// # Examples
///
/// ```
/// use gridlock_core::empty_grid;
/// use gridlock_solver::Solver;
///
/// let mut grid = empty_grid();
/// grid[0][0] = 5;
/// let mut solver = Solver::new(&grid)?;
/// let solution = solver.solve()?;
/// assert_eq!(solution[0][0], 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, PartialEq)]
pub struct Solver {
    cells: Vec<Cell>,
    arena: ConstraintArena,
}

impl Solver {
    /// Builds a solver for a classic sudoku grid.
    ///
    /// `grid` uses the external representation: nine rows of nine
    /// values, `0` for empty and `1..=9` for a given digit.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::WrongRowCount`] or
    /// [`SolverError::WrongColumnCount`] for a malformed shape, or
    /// [`SolverError::Invalid`] naming every out-of-range or duplicated
    /// given.
    pub fn new(grid: &[Vec<i32>]) -> Result<Self, SolverError> {
        Self::with_cages(grid, &[])
    }

    /// Builds a solver for a killer sudoku grid.
    ///
    /// Every cage in `cages` is wired into the cells it covers, on top
    /// of the classic rules.
    ///
    /// # Errors
    ///
    /// As [`Solver::new`], plus [`SolverError::OverlappingCages`] if a
    /// cell belongs to more than one cage and [`SolverError::Invalid`]
    /// if the givens already break a cage sum.
    pub fn with_cages(grid: &[Vec<i32>], cages: &[KillerCage]) -> Result<Self, SolverError> {
        if grid.len() != DIMENSION {
            return Err(SolverError::WrongRowCount { found: grid.len() });
        }
        for (row, values) in grid.iter().enumerate() {
            if values.len() != DIMENSION {
                return Err(SolverError::WrongColumnCount {
                    row,
                    found: values.len(),
                });
            }
        }

        let mut arena = ConstraintArena::new();
        let sudoku = arena.insert(Constraint::Sudoku(SudokuConstraint::new()));
        let bounds = arena.insert(Constraint::Bounds(BoundsConstraint::new()));

        let mut cage_ids: HashMap<Point, ConstraintId> = HashMap::new();
        for cage in cages {
            let id = arena.insert(Constraint::CageSum(CageSumConstraint::new(cage)));
            for &point in cage.cells() {
                if cage_ids.insert(point, id).is_some() {
                    return Err(SolverError::OverlappingCages { point });
                }
            }
        }

        let cells = Point::ALL
            .iter()
            .map(|&point| {
                let cage = cage_ids.get(&point).copied();
                Cell::new(point, [sudoku, bounds].into_iter().chain(cage))
            })
            .collect();

        let mut solver = Self { cells, arena };

        // Givens are written without regard to legality; the validation
        // pass below reports every offending cell together instead of
        // failing on the first one in a left-to-right scan.
        let mut givens = 0_usize;
        for (index, point) in Point::ALL.iter().enumerate() {
            let value = grid[usize::from(point.row())][usize::from(point.col())];
            if value != EMPTY {
                solver.cells[index].write(value, &mut solver.arena);
                givens += 1;
            }
        }

        let mut accumulator = ValidationAccumulator::new();
        for constraint in &solver.arena {
            accumulator.record(constraint.validate());
        }
        accumulator.finish()?;

        debug!(
            "constructed solver: {givens} givens, {} cages",
            cages.len()
        );
        Ok(solver)
    }

    /// Snapshots the current cell values in the external grid
    /// representation.
    ///
    /// Valid at any point, not only after solving: right after
    /// construction it reproduces the input grid.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(DIMENSION)
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    /// Runs the backtracking search to completion.
    ///
    /// Cells are visited in row-major order and candidates tried in
    /// ascending order, so a solvable board always yields the same one
    /// of its possibly many solutions. The first solution found wins.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`] when no complete legal assignment exists.
    pub fn solve(&mut self) -> Result<Vec<Vec<i32>>, NoSolution> {
        self.solve_from(0)?;
        debug!("search completed");
        Ok(self.to_grid())
    }

    /// Depth-first search from linear cell index `index`.
    ///
    /// Every committed guess is rolled back through [`Cell::clear`] on a
    /// dead end, restoring the registries to their pre-write state.
    fn solve_from(&mut self, index: usize) -> Result<(), NoSolution> {
        if index >= self.cells.len() {
            return Ok(());
        }
        if !self.cells[index].is_empty() {
            return self.solve_from(index + 1);
        }
        for guess in MIN_DIGIT..=MAX_DIGIT {
            if !self.cells[index].satisfies(guess, &self.arena) {
                continue;
            }
            self.cells[index].write(guess, &mut self.arena);
            if self.solve_from(index + 1).is_ok() {
                return Ok(());
            }
            self.cells[index].clear(&mut self.arena);
        }
        Err(NoSolution)
    }
}
