//! Aggregate validation across every constraint on a board.

use std::collections::BTreeSet;

use gridlock_core::Point;

/// The reason a set of cells fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// A cell holds a value outside `1..=9`.
    #[display("number out of range")]
    OutOfRange,
    /// A value appears more than once in a row, column, or box.
    #[display("duplicate number in row, column, or box")]
    Duplicate,
    /// A cage's sum is wrong, or can no longer reach its target.
    #[display("cage sum was {got}; wanted {want}")]
    WrongCageSum {
        /// The cage's target sum.
        want: i32,
        /// The sum the cage currently holds.
        got: i32,
    },
    /// Distinct kinds of violation are present at once.
    #[display("multiple validation errors occurred")]
    Multiple,
}

/// One or more cells violate a constraint.
///
/// Carries the deduplicated set of every violating coordinate. The
/// reason stays specific while all merged violations agree and degrades
/// to [`InvalidReason::Multiple`] when they do not.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{reason}")]
pub struct ValidationError {
    reason: InvalidReason,
    points: BTreeSet<Point>,
}

impl ValidationError {
    pub(crate) fn new(reason: InvalidReason, points: BTreeSet<Point>) -> Self {
        Self { reason, points }
    }

    /// Returns the reason for the failure.
    #[must_use]
    pub const fn reason(&self) -> InvalidReason {
        self.reason
    }

    /// Returns every coordinate in violation.
    #[must_use]
    pub const fn points(&self) -> &BTreeSet<Point> {
        &self.points
    }
}

/// Folds per-constraint validation results into a single error.
///
/// Record each constraint's [`validate`](crate::Constraint::validate)
/// outcome, then [`finish`](Self::finish). Nothing short-circuits: a
/// board with a duplicate, an out-of-range given, and a broken cage
/// reports all of their cells together.
///
/// # Examples
///
/// ```
/// use gridlock_solver::ValidationAccumulator;
///
/// let mut accumulator = ValidationAccumulator::new();
/// accumulator.record(Ok(()));
/// assert!(accumulator.finish().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct ValidationAccumulator {
    reason: Option<InvalidReason>,
    points: BTreeSet<Point>,
}

impl ValidationAccumulator {
    /// Creates an accumulator with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one constraint's validation result.
    pub fn record(&mut self, result: Result<(), ValidationError>) {
        let Err(err) = result else { return };
        match self.reason {
            None => self.reason = Some(err.reason),
            Some(reason) if reason != err.reason => self.reason = Some(InvalidReason::Multiple),
            Some(_) => {}
        }
        self.points.extend(err.points);
    }

    /// Returns the merged error, or `Ok` when every result was valid.
    ///
    /// # Errors
    ///
    /// Returns the combined [`ValidationError`] if any recorded result
    /// was a failure.
    pub fn finish(self) -> Result<(), ValidationError> {
        match self.reason {
            None => Ok(()),
            Some(reason) => Err(ValidationError {
                reason,
                points: self.points,
            }),
        }
    }
}
