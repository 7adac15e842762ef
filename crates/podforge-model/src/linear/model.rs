//! Variables and the model container.

use std::collections::HashMap;

use super::{Assignment, Constraint, LinearExpr};
use crate::error::ModelError;

/// Feasibility tolerance used when checking assignments.
pub const TOLERANCE: f64 = 1e-6;

/// Handle of a model variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Binary,
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
    pub lower: i64,
    pub upper: i64,
}

/// A maximization model over bounded integer and boolean variables.
///
/// Constraints may carry a boolean indicator; such rows only bind when the
/// indicator is 1. Backends without native indicator support work on
/// [`Model::linearized`].
#[derive(Debug, Clone, Default)]
pub struct Model {
    variables: Vec<Variable>,
    names: HashMap<String, VarId>,
    constraints: Vec<Constraint>,
    objective: LinearExpr,
    start: Option<Assignment>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a boolean variable.
    pub fn add_binary(&mut self, name: impl Into<String>) -> Result<VarId, ModelError> {
        self.add_variable(name.into(), VarKind::Binary, 0, 1)
    }

    /// Declares an integer variable with domain `[lower, upper]`.
    pub fn add_integer(
        &mut self,
        name: impl Into<String>,
        lower: i64,
        upper: i64,
    ) -> Result<VarId, ModelError> {
        self.add_variable(name.into(), VarKind::Integer, lower, upper)
    }

    fn add_variable(
        &mut self,
        name: String,
        kind: VarKind,
        lower: i64,
        upper: i64,
    ) -> Result<VarId, ModelError> {
        if lower > upper {
            return Err(ModelError::EmptyDomain { name, lower, upper });
        }
        if self.names.contains_key(&name) {
            return Err(ModelError::DuplicateVariable(name));
        }
        let id = VarId(self.variables.len());
        self.names.insert(name.clone(), id);
        self.variables.push(Variable {
            name,
            kind,
            lower,
            upper,
        });
        Ok(id)
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    /// Resolves a variable by its declared name.
    pub fn variable_by_name(&self, name: &str) -> Option<VarId> {
        self.names.get(name).copied()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn indicator_count(&self) -> usize {
        self.constraints
            .iter()
            .filter(|c| c.indicator.is_some())
            .count()
    }

    /// Installs a MIP start after checking it against the model.
    pub fn set_start(&mut self, start: Assignment) -> Result<(), ModelError> {
        self.check(&start)?;
        self.start = Some(start);
        Ok(())
    }

    pub fn start(&self) -> Option<&Assignment> {
        self.start.as_ref()
    }

    /// Evaluates the objective under `assignment`.
    pub fn objective_value(&self, assignment: &Assignment) -> f64 {
        self.objective.evaluate(assignment)
    }

    /// Returns the smallest and largest values `expr` can take over the
    /// variable domains.
    pub fn expr_bounds(&self, expr: &LinearExpr) -> (f64, f64) {
        let mut lo = expr.constant();
        let mut hi = expr.constant();
        for &(var, coef) in expr.terms() {
            let v = self.variable(var);
            let a = coef * v.lower as f64;
            let b = coef * v.upper as f64;
            lo += a.min(b);
            hi += a.max(b);
        }
        (lo, hi)
    }

    /// Checks domains and every enforced row.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check(&self, assignment: &Assignment) -> Result<(), ModelError> {
        if assignment.len() != self.variables.len() {
            return Err(ModelError::AssignmentLength {
                expected: self.variables.len(),
                actual: assignment.len(),
            });
        }

        for (v, &value) in self.variables.iter().zip(assignment.values()) {
            if value < v.lower || value > v.upper {
                return Err(ModelError::OutOfBounds {
                    name: v.name.clone(),
                    value,
                    lower: v.lower,
                    upper: v.upper,
                });
            }
        }

        for c in &self.constraints {
            if !c.is_enforced(assignment) {
                continue;
            }
            let lhs = c.expr.evaluate(assignment);
            if !c.cmp.holds(lhs, c.rhs, TOLERANCE) {
                return Err(ModelError::Violated {
                    name: c.name.clone(),
                    lhs,
                    cmp: c.cmp.symbol(),
                    rhs: c.rhs,
                });
            }
        }

        Ok(())
    }

    pub(super) fn rows_mut(&mut self) -> &mut Vec<Constraint> {
        &mut self.constraints
    }
}
