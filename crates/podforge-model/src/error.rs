//! Error types for model construction and checking.

use podforge_core::PodForgeError;
use thiserror::Error;

/// Errors raised while building or checking a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Variable '{0}' is already declared")]
    DuplicateVariable(String),

    #[error("Variable '{name}' has empty domain [{lower}, {upper}]")]
    EmptyDomain { name: String, lower: i64, upper: i64 },

    #[error("Assignment has {actual} values, model has {expected} variables")]
    AssignmentLength { expected: usize, actual: usize },

    #[error("Variable '{name}' = {value} is outside [{lower}, {upper}]")]
    OutOfBounds {
        name: String,
        value: i64,
        lower: i64,
        upper: i64,
    },

    #[error("Constraint '{name}' violated: {lhs} {cmp} {rhs}")]
    Violated {
        name: String,
        lhs: f64,
        cmp: &'static str,
        rhs: f64,
    },
}

impl From<ModelError> for PodForgeError {
    fn from(err: ModelError) -> Self {
        PodForgeError::Model(err.to_string())
    }
}
