//! The round formulation.
//!
//! `AssignmentModel` declares placement and cube-column variables with the
//! hard constraints; `ObjectiveComposer` adds the preference, early-round and
//! spread terms on the same model. `RoundModel` runs both.

mod assignment;
mod columns;
mod objective;


pub use assignment::{AssignmentModel, VarIndex};
pub use columns::ColumnSpace;
pub use objective::{vote_score, ObjectiveCoefficients, ObjectiveComposer, SCORE_LIMIT};

use podforge_core::RoundInstance;

use crate::error::ModelError;
use crate::linear::Model;

/// A fully built round model with its variable index and coefficient tables.
#[derive(Debug, Clone)]
pub struct RoundModel {
    pub model: Model,
    pub index: VarIndex,
    pub coefficients: ObjectiveCoefficients,
}

impl RoundModel {
    /// Builds constraints and objective for `instance`.
    pub fn build(instance: &RoundInstance) -> Result<Self, ModelError> {
        let assignment = AssignmentModel::build(instance)?;
        let composer = ObjectiveComposer::new(instance, &assignment.index.columns);
        let coefficients = composer.coefficients().clone();
        let AssignmentModel { mut model, mut index } = assignment;
        composer.compose(&mut model, &mut index)?;
        Ok(Self {
            model,
            index,
            coefficients,
        })
    }
}
