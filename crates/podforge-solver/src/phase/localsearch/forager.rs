//! Foragers for local search move selection.

use crate::heuristic::PlanMove;

/// Collects a limited number of accepted moves and picks the best.
///
/// With a limit of one this is a first-accepted forager.
#[derive(Debug, Clone)]
pub struct AcceptedCountForager {
    accepted_count_limit: usize,
    accepted_moves: Vec<(PlanMove, f64)>,
}

impl AcceptedCountForager {
    /// Creates a new forager that stops after `accepted_count_limit` moves.
    pub fn new(accepted_count_limit: usize) -> Self {
        Self {
            accepted_count_limit: accepted_count_limit.max(1),
            accepted_moves: Vec::new(),
        }
    }

    pub fn step_started(&mut self) {
        self.accepted_moves.clear();
    }

    pub fn add_move(&mut self, m: PlanMove, score: f64) {
        self.accepted_moves.push((m, score));
    }

    pub fn is_quit_early(&self) -> bool {
        self.accepted_moves.len() >= self.accepted_count_limit
    }

    /// Removes and returns the best collected move.
    pub fn pick_move(&mut self) -> Option<(PlanMove, f64)> {
        let best = self
            .accepted_moves
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(i, _)| i)?;
        Some(self.accepted_moves.swap_remove(best))
    }
}
