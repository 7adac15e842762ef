//! Acceptors for local search move acceptance.
//!
//! Acceptors determine whether a move should be accepted based on
//! comparing the resulting score with the previous score.

mod hill_climbing;
mod late_acceptance;

use std::fmt::Debug;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(&self, last_step_score: f64, move_score: f64) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: f64) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step ends.
    fn step_ended(&mut self, _step_score: f64) {}
}
