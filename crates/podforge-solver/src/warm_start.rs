//! Native warm start for the exact backend.

use std::time::{Duration, Instant};

use podforge_config::{AcceptorType, WarmStartConfig};
use podforge_core::RoundInstance;
use podforge_model::{Assignment, RoundModel};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::heuristic::{PlanProblem, RoundPlan};
use crate::phase::construction::ConstructionPhase;
use crate::phase::localsearch::{
    AcceptedCountForager, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase,
};
use crate::phase::Phase;
use crate::scope::SearchScope;
use crate::termination::{
    OrTermination, StepCountTermination, TimeTermination, UnimprovedStepCountTermination,
};

/// Construction followed by local search, producing a feasible plan.
#[derive(Debug, Clone)]
pub struct WarmStart {
    config: WarmStartConfig,
    seed: u64,
}

impl WarmStart {
    /// Creates a warm start. Without a seed, one is drawn at random.
    pub fn new(config: WarmStartConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self { config, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Searches for a good plan within `time_limit`.
    ///
    /// Returns `None` when no feasible plan could be constructed.
    pub fn search(
        &self,
        instance: &RoundInstance,
        round: &RoundModel,
        time_limit: Duration,
    ) -> Option<(RoundPlan, f64)> {
        let problem = PlanProblem::new(instance, round.index.columns, &round.coefficients);
        let mut scope = SearchScope::new(&problem, ChaCha8Rng::seed_from_u64(self.seed));

        let mut termination = OrTermination::new().with(TimeTermination::new(time_limit));
        if let Some(limit) = self.config.step_count_limit {
            termination = termination.with(StepCountTermination::new(limit));
        }
        if let Some(limit) = self.config.unimproved_step_count_limit {
            termination = termination.with(UnimprovedStepCountTermination::new(limit));
        }

        ConstructionPhase::new().solve(&mut scope, &termination);

        let moves_per_step = 4 * (problem.player_count() + problem.columns.len());
        let forager = AcceptedCountForager::new(1);
        match self.config.acceptor {
            AcceptorType::LateAcceptance => LocalSearchPhase::new(
                LateAcceptanceAcceptor::new(self.config.late_acceptance_size),
                forager,
                moves_per_step,
            )
            .solve(&mut scope, &termination),
            AcceptorType::HillClimbing => {
                LocalSearchPhase::new(HillClimbingAcceptor::new(), forager, moves_per_step)
                    .solve(&mut scope, &termination)
            }
        }

        scope.take_best()
    }

    /// Runs the search and installs the best plan as the model's MIP start.
    ///
    /// Returns the start's objective value, or `None` if no start was set.
    pub fn install(
        &self,
        instance: &RoundInstance,
        round: &mut RoundModel,
        time_limit: Duration,
    ) -> Option<f64> {
        let started = Instant::now();
        let (plan, score) = self.search(instance, round, time_limit)?;
        let start = self.encode(instance, round, &plan);
        let objective = round.model.objective_value(&start);
        if let Err(e) = round.model.set_start(start) {
            debug!(event = "warm_start_rejected", error = %e);
            return None;
        }
        info!(
            event = "warm_start",
            objective,
            search_score = score,
            seed = self.seed,
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Some(objective)
    }

    fn encode(&self, instance: &RoundInstance, round: &RoundModel, plan: &RoundPlan) -> Assignment {
        round.index.encode(
            &round.model,
            plan.pod_of(),
            plan.column_of(),
            &instance.match_points(),
        )
    }
}
