//! Solver output.

use super::types::{ResolutionEvent, SolveStats};
use crate::matrix::CostMatrix;

/// A complete machine → task assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// `assignment[machine]` is the task given to that machine. Always a
    /// permutation of `0..n`.
    pub assignment: Vec<usize>,
    /// Original cost of each machine's task, indexed by machine.
    pub costs: Vec<f64>,
    /// Sum of `costs`, evaluated against the caller's matrix.
    pub total_cost: f64,
    /// Run counters.
    pub stats: SolveStats,
    /// Labelings and commits in order. Empty unless trace recording was
    /// enabled.
    pub trace: Vec<ResolutionEvent>,
}

impl Solution {
    /// Prices `assignment` against `original`.
    pub(crate) fn extract(
        original: &CostMatrix,
        assignment: Vec<usize>,
        stats: SolveStats,
        trace: Vec<ResolutionEvent>,
    ) -> Self {
        let costs: Vec<f64> = assignment
            .iter()
            .enumerate()
            .map(|(machine, &task)| original.get(machine, task))
            .collect();
        let total_cost = costs.iter().sum();
        Self {
            assignment,
            costs,
            total_cost,
            stats,
            trace,
        }
    }

    /// Number of machines.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether the solution covers no machines.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Task assigned to `machine`.
    pub fn task_of(&self, machine: usize) -> Option<usize> {
        self.assignment.get(machine).copied()
    }

    /// Original cost of `machine`'s assignment.
    pub fn cost_of(&self, machine: usize) -> Option<f64> {
        self.costs.get(machine).copied()
    }

    /// `(machine, task, cost)` in machine order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.assignment
            .iter()
            .zip(&self.costs)
            .enumerate()
            .map(|(machine, (&task, &cost))| (machine, task, cost))
    }
}
