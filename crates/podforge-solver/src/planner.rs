//! The round planning pipeline.

use std::time::Instant;

use podforge_config::{PlannerConfig, SolverBackend};
use podforge_core::{PodAssignment, Result, RoundInstance, RoundOutcome, RoundRequest, Vote};
use podforge_model::RoundModel;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::adapter::Solver;
use crate::extract::{empty_pods, ResultExtractor};
use crate::incumbent::IncumbentSolver;
use crate::milp::MilpSolver;
use crate::warm_start::WarmStart;

/// Plans rounds: validation, sizing, modeling, warm start, solving and
/// extraction.
///
/// One model is built per request and dropped when the request is done, so
/// a planner can serve concurrent requests.
///
/// # Examples
///
/// ```
/// use podforge_config::{PlannerConfig, SolverBackend};
/// use podforge_core::{Cube, Player, RoundRequest, Vote};
/// use podforge_solver::RoundPlanner;
///
/// let planner = RoundPlanner::new(
///     PlannerConfig::new()
///         .with_backend(SolverBackend::Heuristic)
///         .with_random_seed(7)
///         .with_termination_seconds(1),
/// );
/// let request = RoundRequest::new(
///     vec![
///         Player::new("ann", 3).with_vote("A", Vote::Desired),
///         Player::new("bob", 3),
///     ],
///     vec![Cube::new("A"), Cube::new("B")],
/// )
/// .with_pod_sizes(vec![2]);
///
/// let outcome = planner.plan(&request).unwrap();
/// assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("A"));
/// assert_eq!(outcome.want_count, 1);
/// ```
#[derive(Debug)]
pub struct RoundPlanner {
    config: PlannerConfig,
    solver: Box<dyn Solver>,
}

impl RoundPlanner {
    /// Creates a planner with the backend named in `config`.
    pub fn new(config: PlannerConfig) -> Self {
        let solver: Box<dyn Solver> = match config.solver.backend {
            SolverBackend::Milp => Box::new(MilpSolver::new()),
            SolverBackend::Heuristic => Box::new(IncumbentSolver),
        };
        Self { config, solver }
    }

    /// Creates a planner with an explicit backend.
    pub fn with_solver(config: PlannerConfig, solver: Box<dyn Solver>) -> Self {
        Self { config, solver }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Resolves `request` into a round instance.
    ///
    /// # Errors
    ///
    /// Returns `PodForgeError::InvalidRequest` if the request is malformed.
    pub fn instance(&self, request: &RoundRequest) -> Result<RoundInstance> {
        RoundInstance::from_request(
            request,
            &self.config.scoring,
            self.config.solver.refill_used_cubes,
        )
    }

    /// Builds the round model without solving it.
    ///
    /// Returns `None` when the request short-circuits before modeling.
    pub fn model(&self, request: &RoundRequest) -> Result<Option<RoundModel>> {
        let instance = self.instance(request)?;
        if short_circuit(&instance).is_some() {
            return Ok(None);
        }
        Ok(Some(RoundModel::build(&instance)?))
    }

    /// Plans one round.
    ///
    /// Solver failures never surface as errors: the outcome then has empty
    /// pods and a warning.
    ///
    /// # Errors
    ///
    /// Returns `PodForgeError::InvalidRequest` for malformed requests and
    /// `PodForgeError::Internal` if a decoded solution breaks an invariant.
    pub fn plan(&self, request: &RoundRequest) -> Result<RoundOutcome> {
        let started = Instant::now();
        let budget = self.config.time_limit();
        let instance = self.instance(request)?;

        info!(
            event = "plan_start",
            round = instance.round_number,
            players = instance.player_count(),
            pods = instance.pod_count(),
            cubes = instance.cube_count(),
            backend = self.solver.name(),
        );

        if let Some(outcome) = short_circuit(&instance) {
            warn!(event = "plan_end", round = instance.round_number, warning = %outcome.warnings[0]);
            return Ok(outcome);
        }

        let mut warnings = Vec::new();
        let cubeless = instance.cubeless_pod_count();
        if cubeless > 0 {
            warnings.push(format!(
                "only {} cubes available for {} pods; {} pods have no cube",
                instance.cube_count(),
                instance.pod_count(),
                cubeless
            ));
        }

        let mut round = RoundModel::build(&instance)?;
        info!(
            event = "model_built",
            variables = round.model.variable_count(),
            constraints = round.model.constraint_count(),
            indicators = round.model.indicator_count(),
        );

        if self.config.warm_start.enabled {
            let warm_start = WarmStart::new(self.config.warm_start.clone(), self.config.random_seed);
            let fraction = if self.solver.searches() {
                self.config.warm_start.time_fraction
            } else {
                1.0
            };
            let limit = budget.mul_f64(fraction);
            if warm_start.install(&instance, &mut round, limit).is_none() {
                warn!(event = "warm_start", outcome = "no feasible plan constructed");
            }
        }

        let remaining = budget.saturating_sub(started.elapsed());
        let result = self.solver.solve(&round.model, remaining);
        info!(
            event = "solve_end",
            backend = self.solver.name(),
            status = %result.status,
            objective = result.objective,
            message = result.message.as_deref().unwrap_or(""),
        );

        let extractor = ResultExtractor::new(&instance, &round.index);
        let (pods, objective) = match (&result.assignment, result.status.has_solution()) {
            (Some(assignment), true) => (extractor.extract(assignment)?, result.objective),
            _ => {
                warnings.push(format!(
                    "solver returned {}: {}",
                    result.status,
                    result.message.as_deref().unwrap_or("no solution")
                ));
                (extractor.empty_pods(), None)
            }
        };
        let (want_count, avoid_count) = count_votes(&instance, &pods);

        info!(
            event = "plan_end",
            round = instance.round_number,
            status = %result.status,
            want_count,
            avoid_count,
            warnings = warnings.len(),
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(RoundOutcome {
            round_number: instance.round_number,
            pods,
            objective,
            status: Some(result.status),
            want_count,
            avoid_count,
            warnings,
        })
    }

    /// Plans independent rounds in parallel, one result per request.
    pub fn plan_batch(&self, requests: &[RoundRequest]) -> Vec<Result<RoundOutcome>> {
        requests.par_iter().map(|request| self.plan(request)).collect()
    }
}

/// Outcome for rounds that need no model.
fn short_circuit(instance: &RoundInstance) -> Option<RoundOutcome> {
    let round = instance.round_number;
    if instance.player_count() < 2 {
        return Some(RoundOutcome::short_circuit(
            round,
            Vec::new(),
            format!(
                "too few active players ({}); no pods planned",
                instance.player_count()
            ),
        ));
    }
    if instance.cube_count() == 0 {
        return Some(RoundOutcome::short_circuit(
            round,
            empty_pods(&instance.pod_sizes),
            "no cubes available; pods left unassigned",
        ));
    }
    None
}

/// Counts players seated on a cube they marked DESIRED and AVOID.
fn count_votes(instance: &RoundInstance, pods: &[PodAssignment]) -> (usize, usize) {
    let mut want = 0;
    let mut avoid = 0;
    for pod in pods {
        let Some(cube_id) = &pod.cube_id else { continue };
        for id in &pod.player_ids {
            let Some(player) = instance.players.iter().find(|p| &p.id == id) else {
                continue;
            };
            match player.vote_for(cube_id) {
                Vote::Desired => want += 1,
                Vote::Avoid => avoid += 1,
                Vote::Neutral => {}
            }
        }
    }
    (want, avoid)
}
