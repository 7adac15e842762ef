//! Termination conditions for search phases.

mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, scope: &SearchScope<'_, '_>) -> bool;
}
