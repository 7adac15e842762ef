//! Problem facts seen by native search.

use podforge_core::{PodTier, RoundInstance};
use podforge_model::{ColumnSpace, ObjectiveCoefficients};

/// Read-only facts a plan is scored and moved against.
#[derive(Debug)]
pub struct PlanProblem<'a> {
    pub pod_sizes: Vec<usize>,
    pub tiers: Vec<PodTier>,
    pub match_points: Vec<i64>,
    pub columns: ColumnSpace,
    pub coefficients: &'a ObjectiveCoefficients,
    /// `allowed[k][c]`: column `c` respects the capacity of pod `k`.
    allowed: Vec<Vec<bool>>,
}

impl<'a> PlanProblem<'a> {
    pub fn new(
        instance: &RoundInstance,
        columns: ColumnSpace,
        coefficients: &'a ObjectiveCoefficients,
    ) -> Self {
        let allowed = instance
            .pod_sizes
            .iter()
            .map(|&size| {
                columns
                    .all()
                    .map(|c| columns.cube(c).map_or(true, |cube| instance.cubes[cube].fits(size)))
                    .collect()
            })
            .collect();
        Self {
            pod_sizes: instance.pod_sizes.clone(),
            tiers: instance.pod_sizes.iter().map(|&s| PodTier::of_size(s)).collect(),
            match_points: instance.match_points(),
            columns,
            coefficients,
            allowed,
        }
    }

    #[inline]
    pub fn is_allowed(&self, pod: usize, column: usize) -> bool {
        self.allowed[pod][column]
    }

    pub fn player_count(&self) -> usize {
        self.match_points.len()
    }

    pub fn pod_count(&self) -> usize {
        self.pod_sizes.len()
    }
}
