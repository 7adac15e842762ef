//! PodForge Model - integer programming formulation of a tournament round.
//!
//! This crate has two layers:
//! - `linear`: a small, solver-agnostic integer model (bounded variables,
//!   linear rows with optional boolean indicators, a maximized objective,
//!   an optional MIP start) with big-M linearization and an LP writer
//! - `formulation`: the round model itself (placement, cube columns, tier
//!   fairness, preference and spread objective)
//!
//! Solver backends live in `podforge-solver` and consume `linear::Model`.

pub mod error;
pub mod formulation;
pub mod linear;

pub use error::ModelError;
pub use formulation::{
    AssignmentModel, ColumnSpace, ObjectiveCoefficients, ObjectiveComposer, RoundModel, VarIndex,
};
pub use linear::{
    Assignment, Comparison, Constraint, LinearExpr, Model, VarId, VarKind, Variable,
};
