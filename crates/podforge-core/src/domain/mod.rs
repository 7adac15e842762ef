//! Domain model for a single tournament round
//!
//! - `Player`, `Cube`, `Vote`: problem facts supplied by the client
//! - `RoundRequest`: the raw request document, validated before modeling
//! - `RoundInstance`: active players, available cubes and resolved weights
//! - `RoundOutcome`: pods, cubes, objective and warnings returned to the client

mod cube;
mod instance;
mod outcome;
mod player;
mod request;
mod weights;

#[cfg(test)]
mod tests;

pub use cube::Cube;
pub use instance::RoundInstance;
pub use outcome::{
    AssignmentResponse, OfflinePod, OfflineResponse, PodAssignment, RoundOutcome, SolveStatus,
};
pub use player::{Player, Vote};
pub use request::RoundRequest;
pub use weights::ScoringWeights;
