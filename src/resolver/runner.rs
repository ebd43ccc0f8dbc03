//! Degenerate-basis resolution loop.
//!
//! # Algorithm
//!
//! 1. Give every row its row-minimum column (possibly degenerate)
//! 2. Find the first column claimed twice; stop if there is none
//! 3. Label that column. Among rows whose basis column is labeled, pick
//!    the one with the smallest step to an unlabeled column
//! 4. Add that differential to every labeled column of the working matrix
//! 5. If the target column is occupied, label it and go to 3; otherwise
//!    move the row there and go to 2
//!
//! Step 4 keeps every row at its row minimum in the working matrix, and
//! column shifts move every permutation's cost by the same constant, so
//! the resolved bijection is also optimal for the original costs.

use tracing::{debug, trace, warn};

use super::basis::BasisAssignment;
use super::config::ResolverConfig;
use super::labels::LabelPartition;
use super::solution::Solution;
use super::types::{Pivot, ResolutionEvent, SolveStats};
use crate::error::{AssignmentError, Result};
use crate::matrix::CostMatrix;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Searching,
    Labeling { conflict: usize },
    Committing { conflict: usize, pivot: Pivot },
    Resolved,
}

/// Resolves the row-minimum basis of a cost matrix into a permutation.
pub struct DegeneracyResolver;

impl DegeneracyResolver {
    /// Solves the assignment problem for `matrix`.
    ///
    /// `matrix` is only read; the resolver shifts a private copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::{CostMatrix, DegeneracyResolver, ResolverConfig};
    ///
    /// let m = CostMatrix::from_rows(&[[1.0, 2.0, 3.0], [1.0, 5.0, 6.0], [9.0, 8.0, 7.0]]).unwrap();
    /// let solution = DegeneracyResolver::solve(&m, &ResolverConfig::default()).unwrap();
    /// assert_eq!(solution.assignment, vec![1, 0, 2]);
    /// assert_eq!(solution.total_cost, 10.0);
    /// ```
    pub fn solve(matrix: &CostMatrix, config: &ResolverConfig) -> Result<Solution> {
        config.validate()?;

        let n = matrix.size();
        let limit = config.iteration_limit(n);
        let mut working = matrix.clone();
        let mut basis = BasisAssignment::from_row_minima(matrix);
        let mut labels = LabelPartition::new(n);
        let mut stats = SolveStats::default();
        let mut events = Vec::new();

        debug!(n, limit, basis = ?basis.as_slice(), "starting resolution");

        let mut phase = Phase::Searching;
        loop {
            phase = match phase {
                Phase::Searching => match basis.first_conflict() {
                    Some(conflict) => {
                        stats.outer_passes += 1;
                        labels.reset(conflict);
                        debug!(
                            conflict,
                            rows = basis.occupancy(conflict),
                            pass = stats.outer_passes,
                            "resolving duplicated column"
                        );
                        Phase::Labeling { conflict }
                    }
                    None => Phase::Resolved,
                },

                Phase::Labeling { conflict } => {
                    if stats.steps >= limit {
                        warn!(limit, conflict, "resolution step limit exhausted");
                        return Err(AssignmentError::IterationLimit { limit });
                    }
                    stats.steps += 1;

                    let Some(pivot) = select_pivot(&working, &basis, &labels) else {
                        warn!(
                            conflict,
                            labeled = labels.labeled_count(),
                            "no eligible pivot"
                        );
                        return Err(AssignmentError::NoEligiblePivot { column: conflict });
                    };
                    trace!(
                        row = pivot.row,
                        column = pivot.column,
                        displaced = pivot.displaced,
                        delta = pivot.delta,
                        "pivot selected"
                    );

                    if pivot.delta != 0.0 {
                        working.shift_columns(|col| labels.is_labeled(col), pivot.delta);
                    }

                    if basis.is_occupied(pivot.column) {
                        labels.label(pivot.column);
                        stats.labelings += 1;
                        if config.record_trace {
                            events.push(ResolutionEvent::Labeled {
                                conflict,
                                column: pivot.column,
                                delta: pivot.delta,
                            });
                        }
                        Phase::Labeling { conflict }
                    } else {
                        Phase::Committing { conflict, pivot }
                    }
                }

                Phase::Committing { conflict, pivot } => {
                    basis.reassign(pivot.row, pivot.column);
                    stats.commits += 1;

                    let from_still_used = basis.is_occupied(pivot.displaced);
                    debug!(
                        row = pivot.row,
                        from = pivot.displaced,
                        to = pivot.column,
                        from_still_used,
                        "row reassigned"
                    );
                    if config.record_trace {
                        events.push(ResolutionEvent::Committed {
                            conflict,
                            row: pivot.row,
                            from: pivot.displaced,
                            to: pivot.column,
                            delta: pivot.delta,
                            from_still_used,
                        });
                    }
                    Phase::Searching
                }

                Phase::Resolved => break,
            };
        }

        debug!(
            passes = stats.outer_passes,
            steps = stats.steps,
            commits = stats.commits,
            "basis resolved"
        );
        Ok(Solution::extract(matrix, basis.into_inner(), stats, events))
    }
}

/// Cheapest move from a labeled row to an unlabeled column.
///
/// Rows are scanned in order and only a strictly smaller differential
/// replaces the current best, so the first minimal row wins.
fn select_pivot(
    working: &CostMatrix,
    basis: &BasisAssignment,
    labels: &LabelPartition,
) -> Option<Pivot> {
    let mut best: Option<Pivot> = None;

    for (row, &current) in basis.as_slice().iter().enumerate() {
        if !labels.is_labeled(current) {
            continue;
        }
        let Some(column) = working.min_column_where(row, |col| !labels.is_labeled(col)) else {
            continue;
        };

        let delta = working[(row, column)] - working[(row, current)];
        match best {
            Some(ref b) if b.delta <= delta => {}
            _ => {
                best = Some(Pivot {
                    row,
                    column,
                    displaced: current,
                    delta,
                })
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix(rows: &[&[f64]]) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn demo_matrix() -> CostMatrix {
        matrix(&[
            &[10.0, 5.0, 9.0, 18.0, 11.0],
            &[13.0, 19.0, 6.0, 12.0, 14.0],
            &[3.0, 2.0, 4.0, 4.0, 5.0],
            &[18.0, 9.0, 12.0, 17.0, 15.0],
            &[11.0, 6.0, 14.0, 19.0, 10.0],
        ])
    }

    fn solve(m: &CostMatrix) -> Solution {
        DegeneracyResolver::solve(m, &ResolverConfig::default()).unwrap()
    }

    #[test]
    fn test_single_cell() {
        let solution = solve(&matrix(&[&[7.0]]));
        assert_eq!(solution.assignment, vec![0]);
        assert_eq!(solution.total_cost, 7.0);
        assert_eq!(solution.stats, SolveStats::default());
    }

    #[test]
    fn test_non_degenerate_pass_through() {
        let m = matrix(&[&[1.0, 9.0, 9.0], &[9.0, 9.0, 2.0], &[9.0, 3.0, 9.0]]);
        let solution = solve(&m);
        assert_eq!(solution.assignment, vec![0, 2, 1]);
        assert_eq!(solution.total_cost, 6.0);
        assert_eq!(solution.stats.steps, 0);
        assert_eq!(solution.stats.commits, 0);
    }

    #[test]
    fn test_column_zero_conflict() {
        let m = matrix(&[&[1.0, 2.0, 3.0], &[1.0, 5.0, 6.0], &[9.0, 8.0, 7.0]]);
        let config = ResolverConfig::default().with_trace(true);
        let solution = DegeneracyResolver::solve(&m, &config).unwrap();

        assert_eq!(solution.assignment, vec![1, 0, 2]);
        assert_eq!(solution.total_cost, 10.0);
        assert_eq!(
            solution.stats,
            SolveStats {
                outer_passes: 1,
                steps: 1,
                labelings: 0,
                commits: 1,
            }
        );
        assert_eq!(
            solution.trace,
            vec![ResolutionEvent::Committed {
                conflict: 0,
                row: 0,
                from: 0,
                to: 1,
                delta: 1.0,
                from_still_used: true,
            }]
        );
    }

    #[test]
    fn test_demo_instance() {
        let m = demo_matrix();
        let config = ResolverConfig::default().with_trace(true);
        let solution = DegeneracyResolver::solve(&m, &config).unwrap();

        assert_eq!(solution.assignment, vec![0, 2, 3, 1, 4]);
        assert_eq!(solution.total_cost, 39.0);
        assert_eq!(solution.costs, vec![10.0, 6.0, 4.0, 9.0, 10.0]);
        assert_eq!(
            solution.stats,
            SolveStats {
                outer_passes: 4,
                steps: 8,
                labelings: 4,
                commits: 4,
            }
        );

        let labeled: Vec<usize> = solution
            .trace
            .iter()
            .filter_map(|e| match e {
                ResolutionEvent::Labeled { column, .. } => Some(*column),
                _ => None,
            })
            .collect();
        assert_eq!(labeled, vec![2, 2, 0, 4]);

        let moves: Vec<(usize, usize, usize, bool)> = solution
            .trace
            .iter()
            .filter_map(|e| match *e {
                ResolutionEvent::Committed {
                    row,
                    from,
                    to,
                    from_still_used,
                    ..
                } => Some((row, from, to, from_still_used)),
                _ => None,
            })
            .collect();
        assert_eq!(
            moves,
            vec![
                (2, 1, 0, true),
                (4, 1, 4, true),
                (2, 0, 3, false),
                (0, 1, 0, true),
            ]
        );
    }

    #[test]
    fn test_all_ties() {
        let m = CostMatrix::from_flat(4, &[0.0; 16]).unwrap();
        let solution = solve(&m);
        assert_eq!(solution.assignment, vec![3, 2, 1, 0]);
        assert_eq!(solution.total_cost, 0.0);
        assert_eq!(solution.stats.commits, 6);
    }

    #[test]
    fn test_two_by_two_swap() {
        // both rows prefer column 0; either permutation costs 5
        let solution = solve(&matrix(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert_eq!(solution.assignment, vec![1, 0]);
        assert_eq!(solution.total_cost, 5.0);
    }

    #[test]
    fn test_negative_costs() {
        let m = matrix(&[&[-5.0, -1.0], &[-4.0, 2.0]]);
        let solution = solve(&m);
        assert_eq!(solution.assignment, vec![1, 0]);
        assert_eq!(solution.total_cost, -5.0);
    }

    #[test]
    fn test_input_untouched() {
        let m = demo_matrix();
        let before = m.clone();
        let _ = solve(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn test_deterministic() {
        let m = demo_matrix();
        let config = ResolverConfig::default().with_trace(true);
        let a = DegeneracyResolver::solve(&m, &config).unwrap();
        let b = DegeneracyResolver::solve(&m, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iteration_limit() {
        let config = ResolverConfig::default().with_max_iterations(3);
        let err = DegeneracyResolver::solve(&demo_matrix(), &config).unwrap_err();
        assert_eq!(err, AssignmentError::IterationLimit { limit: 3 });
        assert!(err.is_internal());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ResolverConfig::default().with_max_iterations(0);
        let err = DegeneracyResolver::solve(&demo_matrix(), &config).unwrap_err();
        assert!(matches!(err, AssignmentError::InvalidConfig(_)));
    }

    #[test]
    fn test_trace_disabled_by_default() {
        let solution = solve(&demo_matrix());
        assert!(solution.trace.is_empty());
        assert_eq!(solution.stats.steps, 8);
    }

    #[test]
    fn test_select_pivot_first_row_wins_tie() {
        let m = matrix(&[&[0.0, 3.0, 9.0], &[0.0, 3.0, 9.0], &[9.0, 9.0, 0.0]]);
        let basis = BasisAssignment::from_row_minima(&m);
        let mut labels = LabelPartition::new(3);
        labels.reset(0);

        let pivot = select_pivot(&m, &basis, &labels).unwrap();
        assert_eq!(pivot.row, 0);
        assert_eq!(pivot.column, 1);
        assert_eq!(pivot.displaced, 0);
        assert_eq!(pivot.delta, 3.0);
    }

    #[test]
    fn test_select_pivot_none_when_exhausted() {
        let m = matrix(&[&[0.0, 1.0], &[0.0, 1.0]]);
        let basis = BasisAssignment::from_row_minima(&m);
        let mut labels = LabelPartition::new(2);
        labels.reset(0);
        labels.label(1);
        assert!(labels.is_exhausted());
        assert_eq!(select_pivot(&m, &basis, &labels), None);
    }

    fn int_matrix() -> impl Strategy<Value = CostMatrix> {
        (1usize..=5, prop_oneof![Just(1u32), Just(3), Just(10), Just(100)]).prop_flat_map(
            |(n, max)| {
                prop::collection::vec(0..=max, n * n).prop_map(move |cells| {
                    let data: Vec<f64> = cells.into_iter().map(f64::from).collect();
                    CostMatrix::from_flat(n, &data).unwrap()
                })
            },
        )
    }

    fn float_matrix() -> impl Strategy<Value = CostMatrix> {
        (1usize..=6).prop_flat_map(|n| {
            prop::collection::vec(-1000.0f64..1000.0, n * n)
                .prop_map(move |data| CostMatrix::from_flat(n, &data).unwrap())
        })
    }

    fn is_permutation(assignment: &[usize]) -> bool {
        let mut sorted = assignment.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().eq(0..assignment.len())
    }

    proptest! {
        #[test]
        fn matches_exhaustive_optimum(m in int_matrix()) {
            let solution = solve(&m);
            let best = crate::exhaustive::solve(&m).unwrap();

            prop_assert!(is_permutation(&solution.assignment));
            prop_assert_eq!(solution.total_cost, m.assignment_cost(&solution.assignment));
            prop_assert_eq!(solution.total_cost, best.total_cost);
            prop_assert!(solution.stats.steps <= ResolverConfig::default().iteration_limit(m.size()));
        }

        #[test]
        fn float_costs_resolve_to_optimal_permutation(m in float_matrix()) {
            let solution = solve(&m);
            let best = crate::exhaustive::solve(&m).unwrap();

            prop_assert!(is_permutation(&solution.assignment));
            prop_assert!((solution.total_cost - best.total_cost).abs() < 1e-6);
        }

        #[test]
        fn row_minimum_bijection_is_kept(perm in Just((0..5usize).collect::<Vec<_>>()).prop_shuffle()) {
            let mut data = vec![10.0; 25];
            for (row, &col) in perm.iter().enumerate() {
                data[row * 5 + col] = 1.0;
            }
            let m = CostMatrix::from_flat(5, &data).unwrap();
            let solution = solve(&m);

            prop_assert_eq!(&solution.assignment, &perm);
            prop_assert_eq!(solution.stats, SolveStats::default());
        }
    }
}
