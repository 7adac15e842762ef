//! Round outcomes and their wire representations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Termination status reported by a solver backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolveStatus {
    /// Proven optimal within the time budget.
    Optimal,

    /// Feasible, but optimality was not proven (e.g. the budget expired).
    Feasible,

    /// The model has no feasible assignment.
    Infeasible,

    /// The backend failed or found nothing usable.
    Error,
}

impl SolveStatus {
    /// Returns true if the status carries a usable assignment.
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "OPTIMAL"),
            SolveStatus::Feasible => write!(f, "FEASIBLE"),
            SolveStatus::Infeasible => write!(f, "INFEASIBLE"),
            SolveStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// One pod of the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodAssignment {
    /// 0-based pod index, aligned with the pod size list.
    pub index: usize,
    pub size: usize,
    pub cube_id: Option<String>,
    pub player_ids: Vec<String>,
}

impl PodAssignment {
    /// Creates a pod with no players and no cube.
    pub fn empty(index: usize, size: usize) -> Self {
        Self {
            index,
            size,
            cube_id: None,
            player_ids: Vec::new(),
        }
    }
}

/// The full result of planning one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub round_number: u32,
    pub pods: Vec<PodAssignment>,

    /// Objective value reported by the solver, if a solution was found.
    pub objective: Option<f64>,

    /// Solver status, absent when the round short-circuited before modeling.
    pub status: Option<SolveStatus>,

    /// Players placed on a cube they marked DESIRED.
    pub want_count: usize,

    /// Players placed on a cube they marked AVOID.
    pub avoid_count: usize,

    pub warnings: Vec<String>,
}

impl RoundOutcome {
    /// Creates an outcome without a solver run.
    pub fn short_circuit(
        round_number: u32,
        pods: Vec<PodAssignment>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            pods,
            objective: None,
            status: None,
            want_count: 0,
            avoid_count: 0,
            warnings: vec![warning.into()],
        }
    }

    /// Converts to the offline document written by the CLI.
    pub fn to_offline(&self) -> OfflineResponse {
        OfflineResponse {
            pods: self
                .pods
                .iter()
                .map(|pod| OfflinePod {
                    pod_number: pod.index + 1,
                    pod_size: pod.size,
                    cube_id: pod.cube_id.clone().unwrap_or_default(),
                    player_ids: pod.player_ids.clone(),
                })
                .collect(),
            warnings: self.warnings.clone(),
        }
    }

    /// Converts to the index-aligned assignment document.
    pub fn to_assignment(&self) -> AssignmentResponse {
        AssignmentResponse {
            pods: self.pods.iter().map(|p| p.player_ids.clone()).collect(),
            cube_ids: self.pods.iter().map(|p| p.cube_id.clone()).collect(),
            objective: self.objective.unwrap_or(0.0),
        }
    }
}

/// Index-aligned pods, cube ids and objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub pods: Vec<Vec<String>>,
    pub cube_ids: Vec<Option<String>>,
    pub objective: f64,
}

/// A pod in the offline document. A pod without a cube has an empty `cubeId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflinePod {
    pub pod_number: usize,
    pub pod_size: usize,
    pub cube_id: String,
    pub player_ids: Vec<String>,
}

/// The offline (stdin/stdout) response document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineResponse {
    pub pods: Vec<OfflinePod>,
    pub warnings: Vec<String>,
}
