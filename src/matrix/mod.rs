//! Cost matrix for square assignment problems.
//!
//! Rows are machines, columns are tasks. Every entry must be finite;
//! there is no sign constraint.

mod cost;

pub use cost::CostMatrix;
