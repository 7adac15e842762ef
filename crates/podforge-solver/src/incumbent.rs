//! Backend that returns the warm start as is.

use std::time::Duration;

use podforge_model::Model;

use crate::adapter::{Solver, SolverResult};

/// Returns the model's MIP start as FEASIBLE, or ERROR without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncumbentSolver;

impl Solver for IncumbentSolver {
    fn name(&self) -> &'static str {
        "incumbent"
    }

    fn solve(&self, model: &Model, _budget: Duration) -> SolverResult {
        match model.start() {
            Some(start) => match model.check(start) {
                Ok(()) => SolverResult::feasible(model, start.clone(), "heuristic backend"),
                Err(e) => SolverResult::error(format!("warm start is infeasible: {}", e)),
            },
            None => SolverResult::error("no warm start available"),
        }
    }

    fn searches(&self) -> bool {
        false
    }
}
