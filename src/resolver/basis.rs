//! Row-to-column basis.

use crate::matrix::CostMatrix;

/// One chosen column per row. Possibly degenerate: a column may be
/// claimed by several rows until the resolver is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisAssignment {
    columns: Vec<usize>,
}

impl BasisAssignment {
    /// Greedy starting basis: each row takes its row-minimum column, lowest
    /// index on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::CostMatrix;
    /// use u_assign::resolver::BasisAssignment;
    ///
    /// let m = CostMatrix::from_rows(&[[1.0, 2.0, 3.0], [1.0, 5.0, 6.0], [9.0, 8.0, 7.0]]).unwrap();
    /// let basis = BasisAssignment::from_row_minima(&m);
    /// assert_eq!(basis.as_slice(), &[0, 0, 2]);
    /// assert_eq!(basis.first_conflict(), Some(0));
    /// ```
    pub fn from_row_minima(matrix: &CostMatrix) -> Self {
        let columns = (0..matrix.size())
            .map(|row| matrix.row_min_column(row))
            .collect();
        Self { columns }
    }

    #[cfg(test)]
    pub(crate) fn from_columns(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the basis has no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column currently chosen by `row`.
    pub fn column(&self, row: usize) -> usize {
        self.columns[row]
    }

    /// The basis as a slice indexed by row.
    pub fn as_slice(&self) -> &[usize] {
        &self.columns
    }

    /// First column, in row order, seen for a second time. `None` when the
    /// basis is a bijection.
    pub fn first_conflict(&self) -> Option<usize> {
        let mut seen = vec![false; self.columns.len()];
        for &col in &self.columns {
            if seen[col] {
                return Some(col);
            }
            seen[col] = true;
        }
        None
    }

    /// Whether any row currently uses `col`.
    pub fn is_occupied(&self, col: usize) -> bool {
        self.columns.contains(&col)
    }

    /// How many rows currently use `col`.
    pub fn occupancy(&self, col: usize) -> usize {
        self.columns.iter().filter(|&&c| c == col).count()
    }

    /// Whether every column is used exactly once.
    pub fn is_permutation(&self) -> bool {
        self.first_conflict().is_none()
    }

    /// Moves `row` to `col`, returning the displaced column.
    pub fn reassign(&mut self, row: usize, col: usize) -> usize {
        std::mem::replace(&mut self.columns[row], col)
    }

    /// Consumes the basis, yielding the row-indexed columns.
    pub fn into_inner(self) -> Vec<usize> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_minima() {
        let m = CostMatrix::from_rows(&[[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]])
            .unwrap();
        let basis = BasisAssignment::from_row_minima(&m);
        assert_eq!(basis.as_slice(), &[1, 1, 1]);
        assert_eq!(basis.len(), 3);
        assert_eq!(basis.occupancy(1), 3);
    }

    #[test]
    fn test_first_conflict_in_row_order() {
        // column 2 repeats at row 2, column 0 only at row 3
        let basis = BasisAssignment::from_columns(vec![2, 0, 2, 0]);
        assert_eq!(basis.first_conflict(), Some(2));

        let basis = BasisAssignment::from_columns(vec![0, 0, 1]);
        assert_eq!(basis.first_conflict(), Some(0));
    }

    #[test]
    fn test_permutation_has_no_conflict() {
        let basis = BasisAssignment::from_columns(vec![2, 0, 1]);
        assert_eq!(basis.first_conflict(), None);
        assert!(basis.is_permutation());

        let single = BasisAssignment::from_columns(vec![0]);
        assert!(single.is_permutation());
    }

    #[test]
    fn test_reassign() {
        let mut basis = BasisAssignment::from_columns(vec![0, 0, 2]);
        assert!(!basis.is_occupied(1));

        let displaced = basis.reassign(0, 1);
        assert_eq!(displaced, 0);
        assert_eq!(basis.column(0), 1);
        assert!(basis.is_occupied(0));
        assert!(basis.is_permutation());
        assert_eq!(basis.into_inner(), vec![1, 0, 2]);
    }
}
