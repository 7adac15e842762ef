//! PodForge Core - Domain types for tournament pod planning
//!
//! This crate provides the fundamental abstractions shared by the planner:
//! - Players, cubes and votes as received from a tournament client
//! - Round requests, validated round instances and round outcomes
//! - Pod sizing and pod tiers
//! - Dense standing ranks used by the preference bonus

pub mod domain;
pub mod error;
pub mod sizing;
pub mod standings;
pub mod tier;


pub use domain::{
    AssignmentResponse, Cube, OfflinePod, OfflineResponse, Player, PodAssignment, RoundInstance,
    RoundOutcome, RoundRequest, ScoringWeights, SolveStatus, Vote,
};
pub use error::{PodForgeError, Result};
pub use sizing::{pod_sizes_for, STANDARD_POD_SIZE};
pub use standings::StandingRanks;
pub use tier::PodTier;
