//! The solver seam.

use std::fmt::Debug;
use std::time::Duration;

use podforge_core::SolveStatus;
use podforge_model::{Assignment, Model};

/// Outcome of one backend run.
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub status: SolveStatus,

    /// Full variable assignment, present for OPTIMAL and FEASIBLE.
    pub assignment: Option<Assignment>,

    pub objective: Option<f64>,

    /// Why the run ended the way it did, when that is not plain success.
    pub message: Option<String>,
}

impl SolverResult {
    pub fn optimal(model: &Model, assignment: Assignment) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective: Some(model.objective_value(&assignment)),
            assignment: Some(assignment),
            message: None,
        }
    }

    pub fn feasible(model: &Model, assignment: Assignment, message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Feasible,
            objective: Some(model.objective_value(&assignment)),
            assignment: Some(assignment),
            message: Some(message.into()),
        }
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Infeasible,
            assignment: None,
            objective: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Error,
            assignment: None,
            objective: None,
            message: Some(message.into()),
        }
    }

    /// Falls back to the model's MIP start, if it is still feasible.
    pub fn from_start(model: &Model, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        match model.start() {
            Some(start) if model.check(start).is_ok() => {
                Self::feasible(model, start.clone(), format!("{}; using warm start", reason))
            }
            _ => Self::error(reason),
        }
    }
}

/// An exact (or best-effort) backend for `Model`.
///
/// Implementations must respect the budget: return within it, with the
/// best feasible assignment they know of tagged FEASIBLE when the search
/// did not complete.
pub trait Solver: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn solve(&self, model: &Model, budget: Duration) -> SolverResult;

    /// Whether `solve` searches within its budget. Backends that do not
    /// leave the whole budget to the warm start.
    fn searches(&self) -> bool {
        true
    }
}
