use serde::{Deserialize, Serialize};
use crate::ReplicateMatrix;

/// Rule deciding whether an original observation "appears" in a replicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// Observation `j` appears iff index `j` was drawn for the replicate.
    ByIndex,
    /// Observation `j` appears iff some drawn value equals `sample[j]`.
    /// Repeated values in the sample therefore share membership.
    #[default]
    ByValue,
}

/// `nboot × n` table: cell `(i, j)` is true iff observation `j` appears in
/// replicate `i`. Stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipMatrix {
    cells: Vec<bool>,
    n: usize,
    nboot: usize,
}

impl MembershipMatrix {
    /// Tests every (replicate, observation) pair of `matrix` under `rule`.
    ///
    /// Drawn indices or observations outside `sample` never match, so a
    /// `sample` shorter than `matrix.n()` leaves those cells false.
    pub fn build<T: PartialEq>(matrix: &ReplicateMatrix, sample: &[T], rule: Membership) -> Self {
        let n = matrix.n();
        let nboot = matrix.nboot();
        let mut cells = vec![false; n * nboot];

        for (row, drawn) in cells.chunks_exact_mut(n.max(1)).zip(matrix.rows()) {
            match rule {
                Membership::ByIndex => {
                    for &idx in drawn {
                        if let Some(cell) = row.get_mut(idx) {
                            *cell = true;
                        }
                    }
                }
                Membership::ByValue => {
                    for (j, cell) in row.iter_mut().enumerate() {
                        *cell = sample.get(j).is_some_and(|target| {
                            drawn.iter().filter_map(|&idx| sample.get(idx)).any(|v| v == target)
                        });
                    }
                }
            }
        }

        Self { cells, n, nboot }
    }

    /// Whether observation `j` appears in replicate `i`; false out of range.
    pub fn get(&self, i: usize, j: usize) -> bool {
        j < self.n && self.cells.get(i * self.n + j).copied().unwrap_or(false)
    }

    /// Membership of observation `j` across all replicates, in row order.
    pub fn column(&self, j: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.nboot).map(move |i| self.get(i, j))
    }

    /// Number of replicates that do not contain observation `j`.
    pub fn excluded(&self, j: usize) -> usize {
        self.column(j).filter(|inside| !inside).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn draw(n: usize, nboot: usize, seed: u64) -> ReplicateMatrix {
        ReplicateMatrix::draw(n, nboot, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    #[test]
    fn by_index_mirrors_replicate_rows() {
        let sample = [3.0_f64, 1.0, 4.0, 1.5, 9.0];
        let matrix = draw(5, 30, 5);
        let members = MembershipMatrix::build(&matrix, &sample, Membership::ByIndex);

        for (i, j) in iproduct!(0..30, 0..5) {
            assert_eq!(members.get(i, j), matrix.contains(i, j));
        }
    }

    #[test]
    fn rules_agree_on_distinct_values() {
        let sample = [0.1_f64, 0.2, 0.3, 0.4];
        let matrix = draw(4, 50, 8);
        assert_eq!(
            MembershipMatrix::build(&matrix, &sample, Membership::ByIndex),
            MembershipMatrix::build(&matrix, &sample, Membership::ByValue),
        );
    }

    #[test]
    fn by_value_shares_membership_between_ties() {
        let sample = [2.0_f64, 2.0, 5.0];
        let matrix = draw(3, 60, 13);
        let members = MembershipMatrix::build(&matrix, &sample, Membership::ByValue);
        assert!((0..60).all(|i| members.get(i, 0) == members.get(i, 1)));
    }

    #[test]
    fn every_replicate_contains_something() {
        let matrix = draw(6, 40, 21);
        let members = MembershipMatrix::build(&matrix, &[0_u8; 6], Membership::ByIndex);
        assert!((0..40).all(|i| (0..6).any(|j| members.get(i, j))));
        let total_excluded: usize = (0..6).map(|j| members.excluded(j)).sum();
        assert!(total_excluded < 6 * 40);
    }

    #[test]
    fn value_rule_is_the_default() {
        assert_eq!(Membership::default(), Membership::ByValue);
    }

    #[test]
    fn short_sample_leaves_cells_false() {
        let matrix = draw(4, 10, 2);
        let members = MembershipMatrix::build(&matrix, &[1.0_f64, 2.0], Membership::ByValue);
        assert!((0..10).all(|i| !members.get(i, 2) && !members.get(i, 3)));
    }

    #[test]
    fn out_of_range_is_false() {
        let members = MembershipMatrix::build(&draw(2, 3, 1), &[1, 2], Membership::ByIndex);
        assert!(!members.get(3, 0));
        assert!(!members.get(0, 2));
    }
}
