//! Search state shared by phases and terminations.

use std::time::{Duration, Instant};

use rand_chacha::ChaCha8Rng;

use crate::heuristic::{PlanProblem, RoundPlan};

/// Working and best plans, counters and the random source of one search.
#[derive(Debug)]
pub struct SearchScope<'p, 'a> {
    problem: &'p PlanProblem<'a>,
    plan: Option<RoundPlan>,
    score: f64,
    best: Option<(RoundPlan, f64)>,
    start_time: Instant,
    step_count: u64,
    best_step: u64,
    rng: ChaCha8Rng,
}

impl<'p, 'a> SearchScope<'p, 'a> {
    pub fn new(problem: &'p PlanProblem<'a>, rng: ChaCha8Rng) -> Self {
        Self {
            problem,
            plan: None,
            score: f64::NEG_INFINITY,
            best: None,
            start_time: Instant::now(),
            step_count: 0,
            best_step: 0,
            rng,
        }
    }

    pub fn problem(&self) -> &'p PlanProblem<'a> {
        self.problem
    }

    /// Installs an initialized plan as working and best plan.
    pub fn set_plan(&mut self, plan: RoundPlan) {
        self.score = plan.score(self.problem);
        self.best = Some((plan.clone(), self.score));
        self.best_step = self.step_count;
        self.plan = Some(plan);
    }

    pub fn plan(&self) -> Option<&RoundPlan> {
        self.plan.as_ref()
    }

    pub fn plan_mut(&mut self) -> Option<&mut RoundPlan> {
        self.plan.as_mut()
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, s)| *s)
    }

    /// Records the working score after a step and promotes the plan to
    /// best when it improves.
    pub fn step_ended(&mut self, score: f64) {
        self.step_count += 1;
        self.score = score;
        let improved = self.best_score().map_or(true, |best| score > best);
        if improved {
            if let Some(plan) = &self.plan {
                self.best = Some((plan.clone(), score));
                self.best_step = self.step_count;
            }
        }
    }

    pub fn take_best(self) -> Option<(RoundPlan, f64)> {
        self.best
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Steps taken since the best plan last improved.
    pub fn unimproved_step_count(&self) -> u64 {
        self.step_count - self.best_step
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Splits the scope into the working plan and the random source.
    pub(crate) fn plan_and_rng(&mut self) -> Option<(&mut RoundPlan, &mut ChaCha8Rng)> {
        let plan = self.plan.as_mut()?;
        Some((plan, &mut self.rng))
    }
}
