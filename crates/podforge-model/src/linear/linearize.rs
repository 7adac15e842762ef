//! Big-M rewriting of indicator rows.

use super::{Comparison, Constraint, LinearExpr, Model, VarId};

impl Model {
    /// Returns a copy with every indicator row replaced by plain rows.
    ///
    /// For `ind = 1 ⇒ expr <= rhs` the row becomes
    /// `expr + M·ind <= rhs + M` with `M = max(expr) - rhs`, and for
    /// `ind = 1 ⇒ expr >= rhs` it becomes `expr - M·ind >= rhs - M` with
    /// `M = rhs - min(expr)`. Equalities are split into both. A row whose `M`
    /// is not positive holds for every assignment and is dropped.
    pub fn linearized(&self) -> Model {
        let mut out = self.clone();
        let rows = std::mem::take(out.rows_mut());
        let mut linear = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(ind) = row.indicator else {
                linear.push(row);
                continue;
            };
            let (lo, hi) = self.expr_bounds(&row.expr);
            match row.cmp {
                Comparison::LessEq => {
                    linear.extend(upper_row(&row.name, &row.expr, row.rhs, ind, hi));
                }
                Comparison::GreaterEq => {
                    linear.extend(lower_row(&row.name, &row.expr, row.rhs, ind, lo));
                }
                Comparison::Eq => {
                    let le = format!("{}_le", row.name);
                    let ge = format!("{}_ge", row.name);
                    linear.extend(upper_row(&le, &row.expr, row.rhs, ind, hi));
                    linear.extend(lower_row(&ge, &row.expr, row.rhs, ind, lo));
                }
            }
        }

        *out.rows_mut() = linear;
        out
    }
}

fn upper_row(name: &str, expr: &LinearExpr, rhs: f64, ind: VarId, hi: f64) -> Option<Constraint> {
    let m = hi - rhs;
    (m > 0.0).then(|| Constraint::less_eq(name, expr.clone().with_term(ind, m), rhs + m))
}

fn lower_row(name: &str, expr: &LinearExpr, rhs: f64, ind: VarId, lo: f64) -> Option<Constraint> {
    let m = rhs - lo;
    (m > 0.0).then(|| Constraint::greater_eq(name, expr.clone().with_term(ind, -m), rhs - m))
}
