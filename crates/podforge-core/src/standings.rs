//! Dense standing ranks.

use std::collections::BTreeSet;

/// Dense 0-based ranks of match points, 0 being the weakest standing.
///
/// Players sharing a match point total share a rank, and ranks have no gaps.
///
/// # Examples
///
/// ```
/// use podforge_core::StandingRanks;
///
/// let ranks = StandingRanks::new(&[9, 3, 3, 6]);
/// assert_eq!(ranks.rank(0), 2);
/// assert_eq!(ranks.rank(1), 0);
/// assert_eq!(ranks.rank(3), 1);
/// assert_eq!(ranks.max_rank(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StandingRanks {
    ranks: Vec<usize>,
    distinct: usize,
}

impl StandingRanks {
    /// Ranks the given match points, index-aligned with the input.
    pub fn new(match_points: &[i64]) -> Self {
        let levels: Vec<i64> = match_points
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let ranks = match_points
            .iter()
            .map(|mp| levels.binary_search(mp).unwrap_or(0))
            .collect();
        Self {
            ranks,
            distinct: levels.len(),
        }
    }

    /// Returns the dense rank of the player at `index`.
    pub fn rank(&self, index: usize) -> usize {
        self.ranks[index]
    }

    /// Returns the rank normalizer `max(distinct - 1, 1)`.
    pub fn max_rank(&self) -> usize {
        self.distinct.saturating_sub(1).max(1)
    }

    /// Returns `rank / max_rank` for the player at `index`, in `[0, 1]`.
    pub fn relative(&self, index: usize) -> f64 {
        self.rank(index) as f64 / self.max_rank() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_standing_normalizes_to_zero() {
        let ranks = StandingRanks::new(&[4, 4, 4]);
        assert_eq!(ranks.max_rank(), 1);
        assert_eq!(ranks.relative(2), 0.0);
    }

    #[test]
    fn test_ranks_are_dense() {
        let ranks = StandingRanks::new(&[0, 12, 6, 12]);
        assert_eq!(ranks.max_rank(), 2);
        assert_eq!(ranks.rank(1), 2);
        assert_eq!(ranks.relative(2), 0.5);
    }
}
