//! Cubes: the playable resource assigned to pods.

use serde::{Deserialize, Serialize};

/// A cube that can be assigned to at most one pod per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cube {
    /// Unique cube id.
    pub id: String,

    /// Maximum pod size this cube supports. `None` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
}

impl Cube {
    /// Creates a cube without a capacity limit.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            max_players: None,
        }
    }

    /// Creates a cube with a capacity limit.
    pub fn with_max_players(id: impl Into<String>, max_players: u32) -> Self {
        Self {
            id: id.into(),
            max_players: Some(max_players),
        }
    }

    /// Returns true if the cube has a capacity limit.
    pub fn is_limited(&self) -> bool {
        self.max_players.is_some()
    }

    /// Returns true if a pod of `pod_size` players may play this cube.
    pub fn fits(&self, pod_size: usize) -> bool {
        self.max_players
            .map_or(true, |max| pod_size <= max as usize)
    }
}
