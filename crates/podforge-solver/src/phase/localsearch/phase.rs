//! Local search phase implementation.

use tracing::{debug, trace};

use super::{AcceptedCountForager, Acceptor};
use crate::heuristic::RandomMoveSelector;
use crate::phase::Phase;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Local search phase that improves an existing plan.
///
/// Each step samples up to `moves_per_step` random moves, evaluates the
/// doable ones by score delta, hands accepted ones to the forager and
/// applies the move it picks. A step without an accepted move still counts
/// as a step.
#[derive(Debug)]
pub struct LocalSearchPhase<A: Acceptor> {
    selector: RandomMoveSelector,
    acceptor: A,
    forager: AcceptedCountForager,
    moves_per_step: usize,
}

impl<A: Acceptor> LocalSearchPhase<A> {
    /// Creates a new local search phase.
    pub fn new(acceptor: A, forager: AcceptedCountForager, moves_per_step: usize) -> Self {
        Self {
            selector: RandomMoveSelector,
            acceptor,
            forager,
            moves_per_step: moves_per_step.max(1),
        }
    }
}

impl<A: Acceptor> Phase for LocalSearchPhase<A> {
    fn solve(&mut self, scope: &mut SearchScope<'_, '_>, termination: &dyn Termination) {
        if scope.plan().is_none() {
            return;
        }
        let problem = scope.problem();
        let mut last_step_score = scope.score();
        self.acceptor.phase_started(last_step_score);

        loop {
            if termination.is_terminated(scope) {
                break;
            }

            self.forager.step_started();
            let Some((plan, rng)) = scope.plan_and_rng() else {
                break;
            };

            let mut exhausted = false;
            for _ in 0..self.moves_per_step {
                let Some(m) = self.selector.sample(problem, rng) else {
                    exhausted = true;
                    break;
                };
                if !m.is_doable(plan, problem) {
                    continue;
                }
                let move_score = last_step_score + m.score_delta(plan, problem);
                if self.acceptor.is_accepted(last_step_score, move_score) {
                    self.forager.add_move(m, move_score);
                }
                if self.forager.is_quit_early() {
                    break;
                }
            }
            if exhausted {
                break;
            }

            if let Some((m, score)) = self.forager.pick_move() {
                trace!(event = "step", candidate = ?m, score);
                m.do_move(plan);
                last_step_score = score;
            }

            self.acceptor.step_ended(last_step_score);
            scope.step_ended(last_step_score);
        }

        self.acceptor.phase_ended();
        debug!(
            event = "local_search_end",
            steps = scope.step_count(),
            best_score = scope.best_score(),
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
