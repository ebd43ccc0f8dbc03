//! Labeled / unlabeled column partition.

/// Two complementary column sets. A row counts as labeled when its basis
/// column is labeled.
///
/// Within one conflict pass, columns only move from unlabeled to labeled.
#[derive(Debug, Clone)]
pub struct LabelPartition {
    labeled: Vec<bool>,
    count: usize,
}

impl LabelPartition {
    /// All `n` columns unlabeled.
    pub fn new(n: usize) -> Self {
        Self {
            labeled: vec![false; n],
            count: 0,
        }
    }

    /// Starts a new pass with only `col` labeled.
    pub fn reset(&mut self, col: usize) {
        self.labeled.fill(false);
        self.labeled[col] = true;
        self.count = 1;
    }

    /// Labels `col`. Returns `false` if it already was.
    pub fn label(&mut self, col: usize) -> bool {
        if self.labeled[col] {
            return false;
        }
        self.labeled[col] = true;
        self.count += 1;
        true
    }

    /// Whether `col` is in the labeled set.
    pub fn is_labeled(&self, col: usize) -> bool {
        self.labeled[col]
    }

    /// Size of the labeled set.
    pub fn labeled_count(&self) -> usize {
        self.count
    }

    /// Size of the unlabeled set.
    pub fn unlabeled_count(&self) -> usize {
        self.labeled.len() - self.count
    }

    /// Every column is labeled, so no pivot column remains.
    pub fn is_exhausted(&self) -> bool {
        self.count == self.labeled.len()
    }

    /// Labeled columns in ascending order.
    pub fn labeled(&self) -> impl Iterator<Item = usize> + '_ {
        self.labeled
            .iter()
            .enumerate()
            .filter_map(|(col, &on)| on.then_some(col))
    }
}
