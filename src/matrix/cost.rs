//! Dense square cost matrix.

use std::ops::Index;

use rand::Rng;

use crate::error::{AssignmentError, Result};

/// An n×n table of finite costs, rows are machines and columns are tasks.
///
/// Stored row-major. The only mutation is [`CostMatrix::shift_columns`],
/// which the resolver applies to its own working copy.
///
/// # Examples
///
/// ```
/// use u_assign::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m[(1, 0)], 3.0);
/// assert!(CostMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Fails if there are no rows, any row length differs from the row
    /// count, or any entry is not finite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AssignmentError::Empty);
        }

        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(AssignmentError::NotSquare {
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Self::checked(n, data)
    }

    /// Builds a matrix from a row-major buffer of `n * n` costs.
    pub fn from_flat(n: usize, data: &[f64]) -> Result<Self> {
        if n == 0 {
            return Err(AssignmentError::Empty);
        }
        if n.checked_mul(n) != Some(data.len()) {
            return Err(AssignmentError::FlatLengthMismatch { n, len: data.len() });
        }
        Self::checked(n, data.to_vec())
    }

    /// Generates an n×n matrix of integer-valued costs drawn uniformly
    /// from `0..=max`.
    ///
    /// Integer values keep every resolver shift exact, which makes these
    /// instances convenient for benchmarks and cross-checks.
    pub fn random<R: Rng>(n: usize, max: u32, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(AssignmentError::Empty);
        }
        let cells = n
            .checked_mul(n)
            .ok_or(AssignmentError::FlatLengthMismatch { n, len: 0 })?;
        let data: Vec<f64> = (0..cells)
            .map(|_| f64::from(rng.random_range(0..=max)))
            .collect();
        Self::from_flat(n, &data)
    }

    fn checked(n: usize, data: Vec<f64>) -> Result<Self> {
        if let Some((idx, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(AssignmentError::NonFinite {
                row: idx / n,
                col: idx % n,
                value,
            });
        }
        Ok(Self { n, data })
    }

    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// One row of costs.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Iterates over one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(col).step_by(self.n).copied()
    }

    /// Column of the row minimum. Ties go to the lowest column index.
    pub fn row_min_column(&self, row: usize) -> usize {
        self.min_column_where(row, |_| true).unwrap_or(0)
    }

    /// Column of the minimum among columns accepted by `allowed`, lowest
    /// index on ties. `None` when no column is allowed.
    pub fn min_column_where<F>(&self, row: usize, mut allowed: F) -> Option<usize>
    where
        F: FnMut(usize) -> bool,
    {
        let mut best: Option<(usize, f64)> = None;
        for (col, &cost) in self.row(row).iter().enumerate() {
            if !allowed(col) {
                continue;
            }
            match best {
                Some((_, min)) if min <= cost => {}
                _ => best = Some((col, cost)),
            }
        }
        best.map(|(col, _)| col)
    }

    /// Adds `delta` to every entry of each column accepted by `selected`,
    /// across all rows.
    ///
    /// Shifting a whole column changes the cost of every permutation by the
    /// same amount, so the set of optimal assignments is unchanged.
    pub fn shift_columns<F>(&mut self, mut selected: F, delta: f64)
    where
        F: FnMut(usize) -> bool,
    {
        let n = self.n;
        let columns: Vec<usize> = (0..n).filter(|&c| selected(c)).collect();
        for row in self.data.chunks_exact_mut(n) {
            for &col in &columns {
                row[col] += delta;
            }
        }
    }

    /// Sum of `self[(i, assignment[i])]` over all rows.
    pub fn assignment_cost(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(row, &col)| self.get(row, col))
            .sum()
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.n).map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.n + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = AssignmentError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}
