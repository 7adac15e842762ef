//! Linear expressions and constraints.

use std::fmt;

use super::{Assignment, VarId};

/// A linear expression `Σ coef · var + constant`.
///
/// Terms are kept in insertion order and are not merged; a variable may
/// appear more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the given variables with coefficient 1.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1.0)).collect(),
            constant: 0.0,
        }
    }

    /// Adds a term, builder style.
    pub fn with_term(mut self, var: VarId, coef: f64) -> Self {
        self.add_term(var, coef);
        self
    }

    pub fn add_term(&mut self, var: VarId, coef: f64) {
        self.terms.push((var, coef));
    }

    pub fn add_constant(&mut self, value: f64) {
        self.constant += value;
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the expression under `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * assignment.get(var) as f64)
            .sum::<f64>()
            + self.constant
    }

    /// Returns the terms with duplicate variables merged and zero
    /// coefficients dropped, ordered by variable.
    pub fn merged_terms(&self) -> Vec<(VarId, f64)> {
        let mut terms = self.terms.clone();
        terms.sort_by_key(|&(var, _)| var);
        let mut merged: Vec<(VarId, f64)> = Vec::with_capacity(terms.len());
        for (var, coef) in terms {
            match merged.last_mut() {
                Some((last, acc)) if *last == var => *acc += coef,
                _ => merged.push((var, coef)),
            }
        }
        merged.retain(|&(_, coef)| coef != 0.0);
        merged
    }
}

/// Row sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessEq,
    Eq,
    GreaterEq,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::LessEq => "<=",
            Comparison::Eq => "=",
            Comparison::GreaterEq => ">=",
        }
    }

    /// Checks `lhs cmp rhs` with an absolute tolerance.
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Comparison::LessEq => lhs <= rhs + tolerance,
            Comparison::Eq => (lhs - rhs).abs() <= tolerance,
            Comparison::GreaterEq => lhs >= rhs - tolerance,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A linear row `expr cmp rhs`, optionally enforced only when a boolean
/// indicator variable is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub cmp: Comparison,
    pub rhs: f64,
    pub indicator: Option<VarId>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, expr: LinearExpr, cmp: Comparison, rhs: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            cmp,
            rhs,
            indicator: None,
        }
    }

    pub fn less_eq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::LessEq, rhs)
    }

    pub fn equal(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::Eq, rhs)
    }

    pub fn greater_eq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::GreaterEq, rhs)
    }

    /// Enforces the row only when `indicator` is 1.
    pub fn only_if(mut self, indicator: VarId) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Returns true if the row is active under `assignment`.
    pub fn is_enforced(&self, assignment: &Assignment) -> bool {
        self.indicator.map_or(true, |ind| assignment.is_set(ind))
    }
}
