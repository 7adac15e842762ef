//! Termination based on lack of improvement.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates if the best score has not improved for a number of steps.
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn is_terminated(&self, scope: &SearchScope<'_, '_>) -> bool {
        scope.unimproved_step_count() >= self.limit
    }
}
