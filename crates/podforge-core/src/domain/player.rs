//! Players and their cube votes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A player's stated preference for a cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vote {
    /// The player wants to play this cube.
    Desired,

    /// No preference. Also used for cubes the player did not vote on.
    #[default]
    Neutral,

    /// The player wants to avoid this cube.
    Avoid,
}

/// A tournament participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player id.
    pub id: String,

    /// Current standing. Players with similar totals should share a pod.
    pub match_points: i64,

    /// Votes by cube id.
    #[serde(default)]
    pub votes: HashMap<String, Vote>,

    /// Dropped players take no part in the round.
    #[serde(default)]
    pub dropped: bool,

    /// Number of earlier rounds in which the player was given an AVOID cube.
    #[serde(default)]
    pub prior_avoid_count: u32,
}

impl Player {
    /// Creates an active player without votes.
    pub fn new(id: impl Into<String>, match_points: i64) -> Self {
        Self {
            id: id.into(),
            match_points,
            votes: HashMap::new(),
            dropped: false,
            prior_avoid_count: 0,
        }
    }

    /// Adds a vote for a cube.
    pub fn with_vote(mut self, cube_id: impl Into<String>, vote: Vote) -> Self {
        self.votes.insert(cube_id.into(), vote);
        self
    }

    /// Sets the number of prior AVOID assignments.
    pub fn with_prior_avoid_count(mut self, count: u32) -> Self {
        self.prior_avoid_count = count;
        self
    }

    /// Marks the player as dropped.
    pub fn dropped(mut self) -> Self {
        self.dropped = true;
        self
    }

    /// Returns the vote for `cube_id`, NEUTRAL when unspecified.
    pub fn vote_for(&self, cube_id: &str) -> Vote {
        self.votes.get(cube_id).copied().unwrap_or_default()
    }

    /// Returns true if the player takes part in the round.
    pub fn is_active(&self) -> bool {
        !self.dropped
    }
}
