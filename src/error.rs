//! Error taxonomy for the sequencing pipeline.

use thiserror::Error as ThisError;

/// Everything that can go wrong between receiving a stop list and
/// returning a plan.
///
/// A timeout that strikes *after* a feasible tour exists is not an error:
/// the search returns its best-so-far tour and flags the run as
/// time-bounded instead.
#[derive(Debug, ThisError)]
pub enum SolveError {
    /// Malformed caller input: out-of-range coordinates, an empty stop
    /// list, or an unusable externally supplied cost matrix. Reported
    /// before any search is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The time budget expired before even the greedy seed tour could be
    /// constructed.
    #[error("time limit expired before a feasible tour could be constructed")]
    TimeoutNoSolution,

    /// An internal invariant was violated. This is a defect in the solver,
    /// never a condition the caller can correct.
    #[error("internal solver defect: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;

impl SolveError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
