//! Degenerate-basis assignment resolver.
//!
//! Starts from the greedy basis in which every machine takes its cheapest
//! task, then removes duplicated tasks one at a time. Each conflict pass
//! grows a labeled set of columns, shifts the labeled columns of a private
//! working matrix by the smallest available cost differential, and either
//! labels an occupied column or moves a row onto a free one.
//!
//! # Key Components
//!
//! - [`BasisAssignment`]: row → column map, possibly degenerate
//! - [`LabelPartition`]: labeled / unlabeled column sets for one pass
//! - [`DegeneracyResolver`]: the resolution loop
//! - [`Solution`]: permutation priced against the caller's matrix
//!
//! # References
//!
//! Kuhn, H. W. (1955), "The Hungarian method for the assignment problem",
//! *Naval Research Logistics Quarterly* 2, 83-97.

mod basis;
mod config;
mod labels;
mod runner;
mod solution;
mod types;

pub use basis::BasisAssignment;
pub use config::ResolverConfig;
pub use labels::LabelPartition;
pub use runner::DegeneracyResolver;
pub use solution::Solution;
pub use types::{Pivot, ResolutionEvent, SolveStats};
