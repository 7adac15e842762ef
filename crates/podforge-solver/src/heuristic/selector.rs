//! Random move sampling.

use rand::Rng;

use super::{PlanMove, PlanProblem};

/// Samples moves uniformly over the three move kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveSelector;

impl RandomMoveSelector {
    /// Draws one candidate move, or `None` when the problem admits no move
    /// of any kind.
    pub fn sample<R: Rng>(&self, problem: &PlanProblem<'_>, rng: &mut R) -> Option<PlanMove> {
        let players = problem.player_count();
        let pods = problem.pod_count();
        let columns = problem.columns.len();

        let mut kinds = Vec::with_capacity(3);
        if pods > 1 {
            kinds.push(0);
            kinds.push(2);
        }
        if columns > 1 {
            kinds.push(1);
        }
        if kinds.is_empty() || players == 0 {
            return None;
        }

        let m = match kinds[rng.random_range(0..kinds.len())] {
            0 => PlanMove::SwapPlayers {
                a: rng.random_range(0..players),
                b: rng.random_range(0..players),
            },
            1 => PlanMove::ChangeColumn {
                pod: rng.random_range(0..pods),
                column: rng.random_range(0..columns),
            },
            _ => PlanMove::SwapColumns {
                first: rng.random_range(0..pods),
                second: rng.random_range(0..pods),
            },
        };
        Some(m)
    }
}
