//! Hill climbing acceptor.

use super::Acceptor;

/// Accepts only strictly improving moves.
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(&self, last_step_score: f64, move_score: f64) -> bool {
        move_score > last_step_score
    }
}
