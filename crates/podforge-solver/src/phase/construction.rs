//! Construction of an initial plan.

use tracing::debug;

use super::Phase;
use crate::heuristic::{PlanProblem, RoundPlan};
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Builds a feasible plan in one pass.
///
/// Players are taken by decreasing match points and poured into pods from
/// the best tier down, which satisfies tier fairness and keeps pods tight.
/// Columns are then matched to pods over capacity-allowed pairs, seeded
/// greedily by value and completed with augmenting paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructionPhase;

impl ConstructionPhase {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when capacities leave some pod without a column.
    pub fn construct(problem: &PlanProblem<'_>) -> Option<RoundPlan> {
        let mut players: Vec<usize> = (0..problem.player_count()).collect();
        players.sort_by(|&a, &b| problem.match_points[b].cmp(&problem.match_points[a]));

        let mut pods: Vec<usize> = (0..problem.pod_count()).collect();
        pods.sort_by(|&a, &b| problem.tiers[b].cmp(&problem.tiers[a]));

        let mut pod_of = vec![0; problem.player_count()];
        let mut members = vec![Vec::new(); problem.pod_count()];
        let mut next = players.into_iter();
        for &k in &pods {
            for p in next.by_ref().take(problem.pod_sizes[k]) {
                pod_of[p] = k;
                members[k].push(p);
            }
        }

        let column_of = assign_columns(problem, &members)?;
        Some(RoundPlan::new(pod_of, column_of))
    }
}

impl Phase for ConstructionPhase {
    fn solve(&mut self, scope: &mut SearchScope<'_, '_>, _termination: &dyn Termination) {
        match Self::construct(scope.problem()) {
            Some(plan) => {
                scope.set_plan(plan);
                debug!(event = "construction_end", score = scope.score());
            }
            None => debug!(event = "construction_failed", reason = "no column matching"),
        }
    }

    fn phase_type_name(&self) -> &'static str {
        "Construction"
    }
}

fn assign_columns(problem: &PlanProblem<'_>, members: &[Vec<usize>]) -> Option<Vec<usize>> {
    let coefs = problem.coefficients;
    let width = problem.columns.len();
    let mut owner: Vec<Option<usize>> = vec![None; width];
    let mut column_of: Vec<Option<usize>> = vec![None; members.len()];

    let mut edges = Vec::new();
    for (k, pod) in members.iter().enumerate() {
        for c in problem.columns.all() {
            if problem.is_allowed(k, c) {
                let value: f64 = pod.iter().map(|&p| coefs.preference(p, c)).sum::<f64>()
                    + coefs.cube_bonus(c);
                edges.push((value, k, c));
            }
        }
    }
    edges.sort_by(|a, b| b.0.total_cmp(&a.0));
    for (_, k, c) in edges {
        if column_of[k].is_none() && owner[c].is_none() {
            column_of[k] = Some(c);
            owner[c] = Some(k);
        }
    }

    for k in 0..members.len() {
        if column_of[k].is_none() {
            let mut visited = vec![false; width];
            if !augment(problem, k, &mut owner, &mut column_of, &mut visited) {
                return None;
            }
        }
    }

    column_of.into_iter().collect()
}

fn augment(
    problem: &PlanProblem<'_>,
    pod: usize,
    owner: &mut [Option<usize>],
    column_of: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for c in problem.columns.all() {
        if visited[c] || !problem.is_allowed(pod, c) {
            continue;
        }
        visited[c] = true;
        let free = match owner[c] {
            None => true,
            Some(other) => augment(problem, other, owner, column_of, visited),
        };
        if free {
            owner[c] = Some(pod);
            column_of[pod] = Some(c);
            return true;
        }
    }
    false
}
