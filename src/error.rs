//! Error types for assignment solving.

use thiserror::Error;

/// Result type alias using [`AssignmentError`].
pub type Result<T> = std::result::Result<T, AssignmentError>;

/// Errors produced while building a cost matrix or solving an assignment.
///
/// Input errors are reported before any solving starts. Internal errors
/// mean the resolver reached a state its invariants rule out; they are
/// never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    /// The matrix has no rows.
    #[error("cost matrix is empty")]
    Empty,

    /// A row does not have exactly `n` entries.
    #[error("row {row} has {got} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of rows (and therefore required row length).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// A flat buffer is not `n * n` long.
    #[error("flat cost buffer has {len} entries, expected {n}x{n}")]
    FlatLengthMismatch {
        /// Declared matrix size.
        n: usize,
        /// Buffer length.
        len: usize,
    },

    /// A cost is NaN or infinite.
    #[error("non-finite cost {value} at ({row}, {col})")]
    NonFinite {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// The exhaustive reference solver refuses matrices this large.
    #[error("matrix of size {n} exceeds exhaustive search limit {max}")]
    TooLarge {
        /// Matrix size.
        n: usize,
        /// Largest accepted size.
        max: usize,
    },

    /// Resolver configuration is unusable.
    #[error("invalid resolver config: {0}")]
    InvalidConfig(String),

    /// No labeled row had an unlabeled column to move to.
    #[error("no eligible pivot while resolving conflict at column {column}")]
    NoEligiblePivot {
        /// The duplicated column being resolved.
        column: usize,
    },

    /// The resolution step budget ran out.
    #[error("resolution did not finish within {limit} steps")]
    IterationLimit {
        /// The exhausted budget.
        limit: usize,
    },
}

impl AssignmentError {
    /// Returns `true` for invariant violations inside the resolver, as
    /// opposed to rejected input or configuration.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AssignmentError::NoEligiblePivot { .. } | AssignmentError::IterationLimit { .. }
        )
    }
}
