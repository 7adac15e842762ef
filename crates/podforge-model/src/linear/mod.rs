//! Solver-agnostic bounded integer model.

mod assignment;
mod expr;
mod linearize;
mod lp_format;
mod model;


pub use assignment::Assignment;
pub use expr::{Comparison, Constraint, LinearExpr};
pub use lp_format::write_lp;
pub use model::{Model, VarId, VarKind, Variable};
