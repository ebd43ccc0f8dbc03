//! Values produced while resolving a degenerate basis.

/// Row and candidate column chosen in one resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pivot {
    /// Row that would move.
    pub row: usize,
    /// Cheapest unlabeled column for that row.
    pub column: usize,
    /// The row's current basis column.
    pub displaced: usize,
    /// Cost differential `cost[row][column] - cost[row][displaced]` in the
    /// working matrix. Never negative while the basis holds row minima.
    pub delta: f64,
}

/// One observable transition of the resolver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionEvent {
    /// The pivot column was occupied and joined the labeled set.
    Labeled {
        /// Duplicated column whose pass this belongs to.
        conflict: usize,
        /// Newly labeled column.
        column: usize,
        /// Shift applied to the labeled columns before labeling.
        delta: f64,
    },
    /// A row moved to a free column.
    Committed {
        /// Duplicated column whose pass this belongs to.
        conflict: usize,
        /// Row that moved.
        row: usize,
        /// Column it left.
        from: usize,
        /// Column it took.
        to: usize,
        /// Shift applied to the labeled columns before committing.
        delta: f64,
        /// Whether another row still uses `from` after the move.
        from_still_used: bool,
    },
}

/// Counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Conflict passes started (label partition resets).
    pub outer_passes: usize,
    /// Pivot selections.
    pub steps: usize,
    /// Pivots whose column was occupied.
    pub labelings: usize,
    /// Basis reassignments.
    pub commits: usize,
}
