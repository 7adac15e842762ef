//! Plan moves.

use super::{PlanProblem, RoundPlan};

/// A change to a plan. Every doable move keeps the plan feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMove {
    /// Exchange two players between pods.
    SwapPlayers { a: usize, b: usize },

    /// Put a pod on another column.
    ChangeColumn { pod: usize, column: usize },

    /// Exchange the columns of two pods.
    SwapColumns { first: usize, second: usize },
}

impl PlanMove {
    /// Returns true if the move changes the plan and keeps it feasible.
    ///
    /// Players only cross between tiers when their match points are equal;
    /// real columns stay unique and within capacity.
    pub fn is_doable(&self, plan: &RoundPlan, problem: &PlanProblem<'_>) -> bool {
        match *self {
            PlanMove::SwapPlayers { a, b } => {
                let (ka, kb) = (plan.pod_of()[a], plan.pod_of()[b]);
                ka != kb
                    && (problem.tiers[ka] == problem.tiers[kb]
                        || problem.match_points[a] == problem.match_points[b])
            }
            PlanMove::ChangeColumn { pod, column } => {
                plan.column_of()[pod] != column
                    && problem.is_allowed(pod, column)
                    && (!problem.columns.is_real(column) || plan.pod_on(column).is_none())
            }
            PlanMove::SwapColumns { first, second } => {
                let (cf, cs) = (plan.column_of()[first], plan.column_of()[second]);
                first != second
                    && cf != cs
                    && problem.is_allowed(first, cs)
                    && problem.is_allowed(second, cf)
            }
        }
    }

    /// Pods whose score the move changes.
    pub fn affected_pods(&self, plan: &RoundPlan) -> [usize; 2] {
        match *self {
            PlanMove::SwapPlayers { a, b } => [plan.pod_of()[a], plan.pod_of()[b]],
            PlanMove::ChangeColumn { pod, .. } => [pod, pod],
            PlanMove::SwapColumns { first, second } => [first, second],
        }
    }

    /// Applies the move and returns the move that undoes it.
    pub fn do_move(&self, plan: &mut RoundPlan) -> PlanMove {
        match *self {
            PlanMove::SwapPlayers { a, b } => {
                plan.swap_players(a, b);
                *self
            }
            PlanMove::ChangeColumn { pod, column } => {
                let previous = plan.column_of()[pod];
                plan.set_column(pod, column);
                PlanMove::ChangeColumn {
                    pod,
                    column: previous,
                }
            }
            PlanMove::SwapColumns { first, second } => {
                plan.swap_columns(first, second);
                *self
            }
        }
    }

    /// Score change of the move, leaving the plan as it was.
    pub fn score_delta(&self, plan: &mut RoundPlan, problem: &PlanProblem<'_>) -> f64 {
        let pods = self.affected_pods(plan);
        let before = pods_score(plan, problem, pods);
        let undo = self.do_move(plan);
        let after = pods_score(plan, problem, pods);
        undo.do_move(plan);
        after - before
    }
}

fn pods_score(plan: &RoundPlan, problem: &PlanProblem<'_>, pods: [usize; 2]) -> f64 {
    if pods[0] == pods[1] {
        plan.pod_score(problem, pods[0])
    } else {
        plan.pod_score(problem, pods[0]) + plan.pod_score(problem, pods[1])
    }
}
