//! Plan representation and moves for native search.

mod moves;
mod plan;
mod problem;
mod selector;


pub use moves::PlanMove;
pub use plan::RoundPlan;
pub use problem::PlanProblem;
pub use selector::RandomMoveSelector;
