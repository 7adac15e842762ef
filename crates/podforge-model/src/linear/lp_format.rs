//! CPLEX LP text format.

use std::fmt::{self, Write};

use super::{LinearExpr, Model, VarKind};

const TERMS_PER_LINE: usize = 8;

/// Writes `model` in CPLEX LP format.
///
/// Indicator rows are written in their big-M form. Row constants are moved
/// to the right-hand side.
pub fn write_lp<W: Write>(model: &Model, out: &mut W) -> fmt::Result {
    let model = model.linearized();

    writeln!(out, "\\ podforge round model")?;
    writeln!(out, "Maximize")?;
    write!(out, " obj:")?;
    write_terms(&model, model.objective(), out)?;
    let constant = model.objective().constant();
    if constant != 0.0 {
        write!(out, " {} {}", sign(constant), number(constant.abs()))?;
    }
    writeln!(out)?;

    writeln!(out, "Subject To")?;
    for row in model.constraints() {
        write!(out, " {}:", row.name)?;
        write_terms(&model, &row.expr, out)?;
        writeln!(out, " {} {}", row.cmp.symbol(), number(row.rhs - row.expr.constant()))?;
    }

    writeln!(out, "Bounds")?;
    for v in model.variables() {
        if v.kind == VarKind::Integer {
            writeln!(out, " {} <= {} <= {}", v.lower, v.name, v.upper)?;
        }
    }

    write_section(&model, VarKind::Integer, "General", out)?;
    write_section(&model, VarKind::Binary, "Binary", out)?;
    writeln!(out, "End")
}

impl Model {
    /// Renders the model in CPLEX LP format.
    pub fn to_lp_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_lp(self, &mut out);
        out
    }
}

fn write_terms<W: Write>(model: &Model, expr: &LinearExpr, out: &mut W) -> fmt::Result {
    for (i, (var, coef)) in expr.merged_terms().into_iter().enumerate() {
        if i > 0 && i % TERMS_PER_LINE == 0 {
            write!(out, "\n   ")?;
        }
        let name = &model.variable(var).name;
        if i == 0 && coef > 0.0 {
            write!(out, " {} {}", number(coef), name)?;
        } else {
            write!(out, " {} {} {}", sign(coef), number(coef.abs()), name)?;
        }
    }
    Ok(())
}

fn write_section<W: Write>(model: &Model, kind: VarKind, header: &str, out: &mut W) -> fmt::Result {
    let names: Vec<&str> = model
        .variables()
        .iter()
        .filter(|v| v.kind == kind)
        .map(|v| v.name.as_str())
        .collect();
    if names.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", header)?;
    for chunk in names.chunks(TERMS_PER_LINE * 2) {
        writeln!(out, " {}", chunk.join(" "))?;
    }
    Ok(())
}

fn sign(value: f64) -> char {
    if value < 0.0 {
        '-'
    } else {
        '+'
    }
}

fn number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
