//! Solver engine for PodForge.
//!
//! This crate turns a round request into a round outcome:
//! - `adapter`: the narrow `Solver` trait over exact backends
//! - `milp`: `good_lp` backend with an engine-enforced wall-clock budget
//! - `incumbent`: returns the warm start without exact search
//! - `scope`, `termination`, `phase`, `heuristic`: native local search that
//!   produces a feasible MIP start
//! - `extract`: decodes a solved model into pods and cubes
//! - `planner`: owns the whole pipeline

pub mod adapter;
pub mod extract;
pub mod heuristic;
pub mod incumbent;
pub mod milp;
pub mod phase;
pub mod planner;
pub mod scope;
pub mod termination;
pub mod warm_start;

pub use adapter::{Solver, SolverResult};
pub use extract::ResultExtractor;
pub use incumbent::IncumbentSolver;
pub use milp::MilpSolver;
pub use planner::RoundPlanner;
pub use warm_start::WarmStart;

#[cfg(test)]
mod backend_tests;
#[cfg(test)]
mod extract_tests;
#[cfg(test)]
mod planner_tests;
