//! Exhaustive reference solver.
//!
//! Enumerates every permutation and keeps the cheapest. Only practical for
//! small matrices; used to cross-check [`DegeneracyResolver`] results.
//!
//! [`DegeneracyResolver`]: crate::DegeneracyResolver

use crate::error::{AssignmentError, Result};
use crate::matrix::CostMatrix;
use crate::resolver::{Solution, SolveStats};

/// Largest matrix size [`solve`] accepts (10! ≈ 3.6M permutations).
pub const MAX_EXHAUSTIVE_SIZE: usize = 10;

/// Finds a minimum-cost permutation by enumeration.
///
/// Among equally cheap permutations the lexicographically first wins.
///
/// # Examples
///
/// ```
/// use u_assign::{exhaustive, CostMatrix};
///
/// let m = CostMatrix::from_rows(&[[1.0, 2.0, 3.0], [1.0, 5.0, 6.0], [9.0, 8.0, 7.0]]).unwrap();
/// let best = exhaustive::solve(&m).unwrap();
/// assert_eq!(best.assignment, vec![1, 0, 2]);
/// assert_eq!(best.total_cost, 10.0);
/// ```
pub fn solve(matrix: &CostMatrix) -> Result<Solution> {
    let n = matrix.size();
    if n > MAX_EXHAUSTIVE_SIZE {
        return Err(AssignmentError::TooLarge {
            n,
            max: MAX_EXHAUSTIVE_SIZE,
        });
    }

    let mut search = Search {
        matrix,
        used: vec![false; n],
        current: Vec::with_capacity(n),
        best: Vec::new(),
        best_cost: f64::INFINITY,
    };
    search.descend(0.0);

    Ok(Solution::extract(
        matrix,
        search.best,
        SolveStats::default(),
        Vec::new(),
    ))
}

struct Search<'a> {
    matrix: &'a CostMatrix,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Vec<usize>,
    best_cost: f64,
}

impl Search<'_> {
    fn descend(&mut self, partial: f64) {
        let row = self.current.len();
        let n = self.matrix.size();
        if row == n {
            if partial < self.best_cost {
                self.best_cost = partial;
                self.best.clone_from(&self.current);
            }
            return;
        }

        for col in 0..n {
            if self.used[col] {
                continue;
            }
            self.used[col] = true;
            self.current.push(col);
            self.descend(partial + self.matrix.get(row, col));
            self.current.pop();
            self.used[col] = false;
        }
    }
}
