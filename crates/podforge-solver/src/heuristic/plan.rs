//! A complete round plan.

use super::PlanProblem;

/// Every player placed in a pod and every pod on a column.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlan {
    pod_of: Vec<usize>,
    column_of: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl RoundPlan {
    /// Creates a plan from its player and column placements.
    pub fn new(pod_of: Vec<usize>, column_of: Vec<usize>) -> Self {
        let mut members = vec![Vec::new(); column_of.len()];
        for (p, &k) in pod_of.iter().enumerate() {
            members[k].push(p);
        }
        Self {
            pod_of,
            column_of,
            members,
        }
    }

    pub fn pod_of(&self) -> &[usize] {
        &self.pod_of
    }

    pub fn column_of(&self) -> &[usize] {
        &self.column_of
    }

    pub fn members(&self, pod: usize) -> &[usize] {
        &self.members[pod]
    }

    /// Returns the pod holding `column`, if it is in use.
    pub fn pod_on(&self, column: usize) -> Option<usize> {
        self.column_of.iter().position(|&c| c == column)
    }

    pub fn pod_score(&self, problem: &PlanProblem<'_>, pod: usize) -> f64 {
        problem
            .coefficients
            .pod_score(&self.members[pod], self.column_of[pod], &problem.match_points)
    }

    /// Full objective value of the plan.
    pub fn score(&self, problem: &PlanProblem<'_>) -> f64 {
        (0..self.column_of.len())
            .map(|k| self.pod_score(problem, k))
            .sum()
    }

    pub(crate) fn swap_players(&mut self, a: usize, b: usize) {
        let (ka, kb) = (self.pod_of[a], self.pod_of[b]);
        if ka == kb {
            return;
        }
        if let Some(slot) = self.members[ka].iter_mut().find(|p| **p == a) {
            *slot = b;
        }
        if let Some(slot) = self.members[kb].iter_mut().find(|p| **p == b) {
            *slot = a;
        }
        self.pod_of[a] = kb;
        self.pod_of[b] = ka;
    }

    pub(crate) fn set_column(&mut self, pod: usize, column: usize) {
        self.column_of[pod] = column;
    }

    pub(crate) fn swap_columns(&mut self, first: usize, second: usize) {
        self.column_of.swap(first, second);
    }
}
