//! Full variable assignments.

use super::VarId;

/// A value for every variable of a model, indexed by `VarId`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    values: Vec<i64>,
}

impl Assignment {
    /// Creates an all-zero assignment for `len` variables.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0; len],
        }
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, var: VarId) -> i64 {
        self.values[var.index()]
    }

    #[inline]
    pub fn set(&mut self, var: VarId, value: i64) {
        self.values[var.index()] = value;
    }

    /// Returns true if a boolean variable is set.
    #[inline]
    pub fn is_set(&self, var: VarId) -> bool {
        self.values[var.index()] != 0
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}
