//! Pluggable constraints governing which values a cell may hold.
//!
//! A [`Constraint`] is one rule instance with a *scope*: the set of
//! coordinates over which it tracks placed values. Each instance owns a
//! registry that must always reflect exactly the writes and clears
//! applied so far, which is what lets the search commit candidates and
//! roll them back without copying board state.
//!
//! Constraints come in two capabilities, distinguished by
//! [`Constraint::is_point_scoped`]:
//!
//! - *scope-only* rules ([`BoundsConstraint`], [`UniquenessConstraint`])
//!   answer "may this value go anywhere in my scope?" via
//!   [`evaluate`](Constraint::evaluate)
//! - *point-scoped* rules ([`CageSumConstraint`], [`SudokuConstraint`])
//!   need the exact coordinate and answer via
//!   [`evaluate_at`](Constraint::evaluate_at)
//!
//! Instances live in a [`ConstraintArena`] owned by the solver; cells
//! refer to them through [`ConstraintId`] handles, so one instance can
//! be shared by every cell in its scope.

use gridlock_core::Point;

pub use self::{
    bounds::BoundsConstraint, cage_sum::CageSumConstraint, sudoku::SudokuConstraint,
    uniqueness::UniquenessConstraint,
};
use crate::validation::ValidationError;

mod bounds;
mod cage_sum;
mod sudoku;
mod uniqueness;

/// Why a candidate value is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Violation {
    /// The candidate lies outside `1..=9`.
    #[display("number out of range")]
    OutOfRange,
    /// The candidate already appears in the constraint's scope.
    #[display("duplicate value")]
    Duplicate,
    /// The candidate would make a cage's sum wrong or unreachable.
    #[display("cage sum would be {got}; want {want}")]
    WrongCageSum {
        /// The cage's target sum.
        want: i32,
        /// The sum the placement would produce.
        got: i32,
    },
    /// A point-scoped constraint was evaluated without a point.
    #[display("constraint must be evaluated at a point")]
    RequiresPoint,
}

/// A single rule instance restricting the values of the cells in its scope.
///
/// The closed set of rule variants the solver knows how to wire. All
/// variants answer the same capability interface; see the
/// [module docs](self) for the scope-only/point-scoped split.
#[derive(Debug, PartialEq)]
pub enum Constraint {
    /// Values must lie in `1..=9` (empty is always fine).
    Bounds(BoundsConstraint),
    /// No value may repeat within one scope of nine cells.
    Uniqueness(UniquenessConstraint),
    /// A killer cage's cells must sum to its target.
    CageSum(CageSumConstraint),
    /// The 27 classic row/column/box uniqueness scopes as one rule.
    Sudoku(SudokuConstraint),
}

impl Constraint {
    /// Reports whether this constraint must be evaluated at a point.
    #[must_use]
    pub const fn is_point_scoped(&self) -> bool {
        matches!(self, Self::CageSum(_) | Self::Sudoku(_))
    }

    /// Decides whether `value` may currently be placed anywhere in the
    /// constraint's scope, without committing it.
    ///
    /// # Errors
    ///
    /// Returns the violation the placement would cause. Point-scoped
    /// variants always return [`Violation::RequiresPoint`]; use
    /// [`evaluate_at`](Self::evaluate_at) for them.
    pub fn evaluate(&self, value: i32) -> Result<(), Violation> {
        match self {
            Self::Bounds(constraint) => constraint.evaluate(value),
            Self::Uniqueness(constraint) => constraint.evaluate(value),
            Self::CageSum(_) | Self::Sudoku(_) => Err(Violation::RequiresPoint),
        }
    }

    /// Decides whether `value` may currently be placed at `point`,
    /// accounting for whatever the registry holds there already.
    ///
    /// Scope-only variants ignore the point and behave like
    /// [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    ///
    /// Returns the violation the placement would cause.
    pub fn evaluate_at(&self, value: i32, point: Point) -> Result<(), Violation> {
        match self {
            Self::CageSum(constraint) => constraint.evaluate_at(value, point),
            Self::Sudoku(constraint) => constraint.evaluate_at(value, point),
            Self::Bounds(_) | Self::Uniqueness(_) => self.evaluate(value),
        }
    }

    /// Commits `value` into the registry at `point`.
    ///
    /// Points outside the constraint's scope are ignored.
    pub fn add_value(&mut self, value: i32, point: Point) {
        match self {
            Self::Bounds(constraint) => constraint.add_value(value, point),
            Self::Uniqueness(constraint) => constraint.add_value(value, point),
            Self::CageSum(constraint) => constraint.add_value(value, point),
            Self::Sudoku(constraint) => constraint.add_value(value, point),
        }
    }

    /// Undoes a previous [`add_value`](Self::add_value).
    ///
    /// Removing a value that was never added is a no-op.
    pub fn remove_value(&mut self, value: i32, point: Point) {
        match self {
            Self::Bounds(constraint) => constraint.remove_value(value, point),
            Self::Uniqueness(constraint) => constraint.remove_value(value, point),
            Self::CageSum(constraint) => constraint.remove_value(value, point),
            Self::Sudoku(constraint) => constraint.remove_value(value, point),
        }
    }

    /// Inspects the registry and reports every coordinate currently in
    /// violation, not just the first.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every violating coordinate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Bounds(constraint) => constraint.validate(),
            Self::Uniqueness(constraint) => constraint.validate(),
            Self::CageSum(constraint) => constraint.validate(),
            Self::Sudoku(constraint) => constraint.validate(),
        }
    }
}

/// Handle to a constraint stored in a [`ConstraintArena`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintId(usize);

/// Owns every constraint instance wired into one board.
///
/// Cells hold [`ConstraintId`] handles instead of the constraints
/// themselves, so many cells can share one mutable instance (all 81
/// cells share the composite sudoku rules; each cage's cells share its
/// cage-sum rule) while the solver keeps single ownership.
#[derive(Debug, Default, PartialEq)]
pub struct ConstraintArena {
    constraints: Vec<Constraint>,
}

impl ConstraintArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `constraint` and returns its handle.
    pub fn insert(&mut self, constraint: Constraint) -> ConstraintId {
        let id = ConstraintId(self.constraints.len());
        self.constraints.push(constraint);
        id
    }

    /// Iterates over every stored constraint.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }
}

impl std::ops::Index<ConstraintId> for ConstraintArena {
    type Output = Constraint;

    fn index(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.0]
    }
}

impl std::ops::IndexMut<ConstraintId> for ConstraintArena {
    fn index_mut(&mut self, id: ConstraintId) -> &mut Constraint {
        &mut self.constraints[id.0]
    }
}

impl<'a> IntoIterator for &'a ConstraintArena {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
