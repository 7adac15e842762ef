//! Round request document and its validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Cube, Player, ScoringWeights};
use crate::error::{PodForgeError, Result};

/// A request to plan one round.
///
/// Only `players` and `cubes` are required; every weight left out falls back
/// to the planner's configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRequest {
    pub players: Vec<Player>,
    pub cubes: Vec<Cube>,

    /// Explicit pod sizes. Computed from the active player count when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_sizes: Option<Vec<usize>>,

    /// Cubes already played in earlier rounds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_cube_ids: Vec<String>,

    #[serde(default = "first_round")]
    pub round_number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_round_bonus: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_want: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_avoid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_neutral: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_point_penalty_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_standing_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_avoid_multiplier: Option<f64>,
}

fn first_round() -> u32 {
    1
}

impl RoundRequest {
    /// Creates a first-round request with default weights.
    pub fn new(players: Vec<Player>, cubes: Vec<Cube>) -> Self {
        Self {
            players,
            cubes,
            pod_sizes: None,
            used_cube_ids: Vec::new(),
            round_number: 1,
            early_round_bonus: None,
            score_want: None,
            score_avoid: None,
            score_neutral: None,
            match_point_penalty_weight: None,
            lower_standing_bonus: None,
            repeat_avoid_multiplier: None,
        }
    }

    /// Sets explicit pod sizes.
    pub fn with_pod_sizes(mut self, pod_sizes: Vec<usize>) -> Self {
        self.pod_sizes = Some(pod_sizes);
        self
    }

    /// Sets the round number.
    pub fn with_round_number(mut self, round_number: u32) -> Self {
        self.round_number = round_number;
        self
    }

    /// Sets the cubes already played in earlier rounds.
    pub fn with_used_cube_ids(mut self, used: Vec<String>) -> Self {
        self.used_cube_ids = used;
        self
    }

    /// Returns the number of non-dropped players.
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Resolves the effective weights, request values taking precedence.
    pub fn weights(&self, defaults: &ScoringWeights) -> ScoringWeights {
        ScoringWeights {
            score_want: self.score_want.unwrap_or(defaults.score_want),
            score_avoid: self.score_avoid.unwrap_or(defaults.score_avoid),
            score_neutral: self.score_neutral.unwrap_or(defaults.score_neutral),
            match_point_penalty_weight: self
                .match_point_penalty_weight
                .unwrap_or(defaults.match_point_penalty_weight),
            lower_standing_bonus: self
                .lower_standing_bonus
                .unwrap_or(defaults.lower_standing_bonus),
            repeat_avoid_multiplier: self
                .repeat_avoid_multiplier
                .unwrap_or(defaults.repeat_avoid_multiplier),
            early_round_bonus: self.early_round_bonus.unwrap_or(defaults.early_round_bonus),
        }
    }

    /// Checks the request before any modeling.
    ///
    /// # Errors
    ///
    /// Returns `PodForgeError::InvalidRequest` for empty or duplicate ids,
    /// zero cube capacities, non-positive pod sizes, pod sizes that do not sum
    /// to the active player count, a zero round number, or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.round_number == 0 {
            return Err(invalid("roundNumber must be at least 1"));
        }

        let mut player_ids = HashSet::new();
        for player in &self.players {
            if player.id.is_empty() {
                return Err(invalid("player id must not be empty"));
            }
            if !player_ids.insert(player.id.as_str()) {
                return Err(invalid(format!("duplicate player id '{}'", player.id)));
            }
        }

        let mut cube_ids = HashSet::new();
        for cube in &self.cubes {
            if cube.id.is_empty() {
                return Err(invalid("cube id must not be empty"));
            }
            if !cube_ids.insert(cube.id.as_str()) {
                return Err(invalid(format!("duplicate cube id '{}'", cube.id)));
            }
            if cube.max_players == Some(0) {
                return Err(invalid(format!(
                    "cube '{}' has maxPlayers 0; omit it for no limit",
                    cube.id
                )));
            }
        }

        if let Some(sizes) = &self.pod_sizes {
            if sizes.iter().any(|&s| s == 0) {
                return Err(invalid("podSizes must all be positive"));
            }
            let total: usize = sizes.iter().sum();
            let active = self.active_player_count();
            if total != active {
                return Err(invalid(format!(
                    "podSizes sum to {} but there are {} active players",
                    total, active
                )));
            }
        }

        let weights = [
            ("scoreWant", self.score_want),
            ("scoreAvoid", self.score_avoid),
            ("scoreNeutral", self.score_neutral),
            ("matchPointPenaltyWeight", self.match_point_penalty_weight),
            ("lowerStandingBonus", self.lower_standing_bonus),
            ("repeatAvoidMultiplier", self.repeat_avoid_multiplier),
        ];
        for (name, value) in weights {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(invalid(format!("{} must be a finite number", name)));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> PodForgeError {
    PodForgeError::InvalidRequest(message.into())
}
