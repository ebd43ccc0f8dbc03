//! Square assignment solver.
//!
//! Given an n×n matrix of costs between machines (rows) and tasks
//! (columns), finds a one-to-one machine → task mapping of minimum total
//! cost:
//!
//! - **Matrix**: [`CostMatrix`], a validated dense table of finite costs.
//! - **Resolver**: [`DegeneracyResolver`] starts from each machine's
//!   cheapest task and resolves duplicated tasks by growing alternating
//!   label sets and shifting column costs of a private working copy.
//! - **Exhaustive reference**: [`exhaustive::solve`] enumerates all
//!   permutations for small matrices, for cross-validation.
//!
//! # Examples
//!
//! ```
//! use u_assign::CostMatrix;
//!
//! let m = CostMatrix::from_rows(&[
//!     [10.0, 5.0, 9.0, 18.0, 11.0],
//!     [13.0, 19.0, 6.0, 12.0, 14.0],
//!     [3.0, 2.0, 4.0, 4.0, 5.0],
//!     [18.0, 9.0, 12.0, 17.0, 15.0],
//!     [11.0, 6.0, 14.0, 19.0, 10.0],
//! ])
//! .unwrap();
//!
//! let solution = u_assign::solve(&m).unwrap();
//! assert_eq!(solution.assignment, vec![0, 2, 3, 1, 4]);
//! assert_eq!(solution.total_cost, 39.0);
//! ```
//!
//! # Logging
//!
//! The resolver emits `tracing` events (`debug` per pass and commit,
//! `trace` per pivot, `warn` before an internal error). Install a
//! subscriber in the application to see them.

pub mod error;
pub mod exhaustive;
pub mod matrix;
pub mod resolver;

pub use error::{AssignmentError, Result};
pub use matrix::CostMatrix;
pub use resolver::{DegeneracyResolver, ResolutionEvent, ResolverConfig, Solution, SolveStats};

/// Solves `matrix` with the default [`ResolverConfig`].
pub fn solve(matrix: &CostMatrix) -> Result<Solution> {
    DegeneracyResolver::solve(matrix, &ResolverConfig::default())
}
