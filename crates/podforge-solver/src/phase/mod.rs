//! Search phases.
//!
//! - ConstructionPhase: builds an initial feasible plan
//! - LocalSearchPhase: improves an existing plan

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use crate::scope::SearchScope;
use crate::termination::Termination;

/// A phase of the search.
///
/// Phases are executed in sequence. Each phase modifies the working plan in
/// the scope and records improvements as it goes.
pub trait Phase: Send + Debug {
    /// Executes this phase until it is done or `termination` fires.
    fn solve(&mut self, scope: &mut SearchScope<'_, '_>, termination: &dyn Termination);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
