//! PodForge - tournament pod and cube assignment in Rust
//!
//! Seats the active players of a round into pods and assigns each pod a
//! cube, respecting pod sizes, cube capacities and standings tiers while
//! honoring cube votes.
//!
//! # Example
//!
//! ```rust
//! use podforge::prelude::*;
//!
//! assert_eq!(pod_sizes_for(17), vec![9, 8]);
//!
//! let request = RoundRequest::new(
//!     vec![
//!         Player::new("ann", 3).with_vote("A", Vote::Desired),
//!         Player::new("bob", 3),
//!     ],
//!     vec![Cube::new("A"), Cube::new("B")],
//! )
//! .with_pod_sizes(vec![2]);
//!
//! let config = PlannerConfig::new()
//!     .with_backend(SolverBackend::Heuristic)
//!     .with_random_seed(1)
//!     .with_termination_seconds(1);
//! let outcome = plan_round_with(&request, config).unwrap();
//! assert_eq!(outcome.to_offline().pods[0].cube_id, "A");
//! ```

// Domain types
pub use podforge_core::{
    pod_sizes_for, AssignmentResponse, Cube, OfflinePod, OfflineResponse, Player, PodAssignment,
    PodForgeError, PodTier, Result, RoundInstance, RoundOutcome, RoundRequest, ScoringWeights,
    SolveStatus, StandingRanks, Vote, STANDARD_POD_SIZE,
};

// Configuration
pub use podforge_config::{
    AcceptorType, ConfigError, PlannerConfig, SolverBackend, SolverConfig, TerminationConfig,
    WarmStartConfig,
};

// Formulation and the solver-agnostic model
pub use podforge_model::{linear, RoundModel};

// Planner and backends
pub use podforge_solver::{
    IncumbentSolver, MilpSolver, RoundPlanner, Solver, SolverResult, WarmStart,
};

#[cfg(feature = "console")]
pub use podforge_console as console;

mod planner;
pub use planner::{plan_round, plan_round_with, CONFIG_FILE};

pub mod prelude {
    pub use super::{plan_round, plan_round_with};
    pub use super::{
        pod_sizes_for, Cube, OfflineResponse, Player, RoundOutcome, RoundRequest, SolveStatus,
        Vote,
    };
    pub use super::{PlannerConfig, RoundPlanner, SolverBackend};
}

#[cfg(test)]
mod tests;
