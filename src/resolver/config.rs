//! Resolver configuration.

use crate::error::{AssignmentError, Result};

/// Configuration for [`DegeneracyResolver`](super::DegeneracyResolver).
///
/// # Examples
///
/// ```
/// use u_assign::ResolverConfig;
///
/// let config = ResolverConfig::default()
///     .with_max_iterations(500)
///     .with_trace(true);
/// assert_eq!(config.iteration_limit(10), 500);
/// assert!(config.record_trace);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Hard cap on resolution steps (pivot selections). `None` derives the
    /// cap from the matrix size, `n² · (n + 1)`.
    pub max_iterations: Option<usize>,
    /// Whether to record every labeling and commit in
    /// [`Solution::trace`](super::Solution::trace).
    pub record_trace: bool,
}

impl ResolverConfig {
    /// Sets an explicit step cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Enables or disables trace recording.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Step cap for an n×n matrix.
    pub fn iteration_limit(&self, n: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| (n * n * (n + 1)).max(1))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == Some(0) {
            return Err(AssignmentError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}
