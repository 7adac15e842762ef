//! Objective weights.

use serde::{Deserialize, Serialize};

/// Weights of the round objective.
///
/// `match_point_penalty_weight` is expected to dominate the preference terms so
/// that standing segregation wins over preference satisfaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScoringWeights {
    /// Base reward for a DESIRED cube.
    pub score_want: f64,

    /// Base penalty (negative) for an AVOID cube.
    pub score_avoid: f64,

    /// Score for a NEUTRAL or unvoted cube.
    pub score_neutral: f64,

    /// Weight of the per-pod match point spread.
    pub match_point_penalty_weight: f64,

    /// Extra share of `score_want` granted to the weakest standings.
    pub lower_standing_bonus: f64,

    /// Growth factor of the AVOID penalty per prior AVOID assignment.
    pub repeat_avoid_multiplier: f64,

    /// Round-one bonus per avoider for placing unpopular cubes early.
    pub early_round_bonus: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            score_want: 5.0,
            score_avoid: -200.0,
            score_neutral: 0.0,
            match_point_penalty_weight: 10_000.0,
            lower_standing_bonus: 0.3,
            repeat_avoid_multiplier: 4.0,
            early_round_bonus: 3,
        }
    }
}
