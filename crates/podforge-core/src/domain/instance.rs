//! Validated, request-scoped problem data.

use std::collections::HashSet;

use super::{Cube, Player, RoundRequest, ScoringWeights};
use crate::error::Result;
use crate::sizing::pod_sizes_for;

/// The problem facts of one round, after filtering and validation.
///
/// Players are the active players in request order; cubes are the cubes still
/// available this round. Built fresh per request and never shared.
#[derive(Debug, Clone)]
pub struct RoundInstance {
    pub round_number: u32,
    pub players: Vec<Player>,
    pub cubes: Vec<Cube>,
    pub pod_sizes: Vec<usize>,
    pub weights: ScoringWeights,
}

impl RoundInstance {
    /// Validates `request` and resolves it into a round instance.
    ///
    /// Dropped players are removed and cubes listed in `usedCubeIds` are
    /// excluded. With `refill_used_cubes`, the used cubes are appended again
    /// when fewer cubes than pods would remain.
    ///
    /// # Errors
    ///
    /// Returns `PodForgeError::InvalidRequest` if validation fails.
    pub fn from_request(
        request: &RoundRequest,
        defaults: &ScoringWeights,
        refill_used_cubes: bool,
    ) -> Result<Self> {
        request.validate()?;

        let players: Vec<Player> = request
            .players
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect();

        let pod_sizes = match &request.pod_sizes {
            Some(sizes) => sizes.clone(),
            None => pod_sizes_for(players.len()),
        };

        let used: HashSet<&str> = request.used_cube_ids.iter().map(String::as_str).collect();
        let (mut cubes, played): (Vec<Cube>, Vec<Cube>) = request
            .cubes
            .iter()
            .cloned()
            .partition(|c| !used.contains(c.id.as_str()));
        if refill_used_cubes && cubes.len() < pod_sizes.len() {
            cubes.extend(played);
        }

        Ok(Self {
            round_number: request.round_number,
            players,
            cubes,
            pod_sizes,
            weights: request.weights(defaults),
        })
    }

    /// Number of active players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of pods.
    pub fn pod_count(&self) -> usize {
        self.pod_sizes.len()
    }

    /// Number of real cubes available.
    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    /// Number of pods that cannot receive a real cube.
    pub fn cubeless_pod_count(&self) -> usize {
        self.pod_count().saturating_sub(self.cube_count())
    }

    /// Returns the lowest and highest match points among active players.
    pub fn match_point_range(&self) -> Option<(i64, i64)> {
        let min = self.players.iter().map(|p| p.match_points).min()?;
        let max = self.players.iter().map(|p| p.match_points).max()?;
        Some((min, max))
    }

    /// Match points of the active players, index-aligned with `players`.
    pub fn match_points(&self) -> Vec<i64> {
        self.players.iter().map(|p| p.match_points).collect()
    }
}
