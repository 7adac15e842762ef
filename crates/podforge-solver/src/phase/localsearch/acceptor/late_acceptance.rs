//! Late acceptance acceptor.

use super::Acceptor;

/// Late acceptance acceptor - accepts moves that improve on a historical score.
///
/// Maintains a circular buffer of recent step scores and accepts moves that
/// are at least as good as the score from N steps ago.
///
/// # Example
///
/// ```
/// use podforge_solver::phase::localsearch::{Acceptor, LateAcceptanceAcceptor};
///
/// let mut acceptor = LateAcceptanceAcceptor::new(2);
/// acceptor.phase_started(10.0);
/// assert!(acceptor.is_accepted(10.0, 10.0));
/// assert!(!acceptor.is_accepted(10.0, 9.0));
/// ```
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    late_acceptance_size: usize,
    score_history: Vec<f64>,
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    /// Creates a new late acceptance acceptor keeping `late_acceptance_size`
    /// historical scores.
    pub fn new(late_acceptance_size: usize) -> Self {
        let size = late_acceptance_size.max(1);
        Self {
            late_acceptance_size: size,
            score_history: vec![f64::NEG_INFINITY; size],
            current_index: 0,
        }
    }
}

impl Default for LateAcceptanceAcceptor {
    fn default() -> Self {
        Self::new(400)
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn is_accepted(&self, last_step_score: f64, move_score: f64) -> bool {
        move_score > last_step_score || move_score >= self.score_history[self.current_index]
    }

    fn phase_started(&mut self, initial_score: f64) {
        self.score_history.fill(initial_score);
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: f64) {
        self.score_history[self.current_index] = step_score;
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
