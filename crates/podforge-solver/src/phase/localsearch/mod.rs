//! Local search over round plans.

pub mod acceptor;
mod forager;
mod phase;

pub use acceptor::{Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor};
pub use forager::AcceptedCountForager;
pub use phase::LocalSearchPhase;
