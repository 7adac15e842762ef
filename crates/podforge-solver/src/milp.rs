//! Exact backend on `good_lp` (pure-Rust `microlp` engine).

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolutionStatus,
    SolverModel, Variable as LpVariable, WithInitialSolution, WithTimeLimit,
};
use podforge_model::{Assignment, Comparison, LinearExpr, Model, VarKind};
use tracing::{debug, warn};

use crate::adapter::{Solver, SolverResult};

/// Exact MILP search on the calling thread.
///
/// Indicator rows are linearized with big-M before the model reaches the
/// engine. The engine itself enforces the budget and is seeded with the
/// model's MIP start, so an interrupted search still reports the best
/// incumbent it holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpSolver;

impl MilpSolver {
    pub fn new() -> Self {
        Self
    }
}

struct EngineSolution {
    values: Vec<i64>,
    proven: bool,
}

impl Solver for MilpSolver {
    fn name(&self) -> &'static str {
        "milp"
    }

    fn solve(&self, model: &Model, budget: Duration) -> SolverResult {
        let linear = model.linearized();
        debug!(
            event = "milp_start",
            variables = linear.variable_count(),
            rows = linear.constraint_count(),
            budget_ms = budget.as_millis() as u64,
            seeded = linear.start().is_some(),
        );

        let expired = || format!("time budget of {} ms expired", budget.as_millis());

        match catch_unwind(AssertUnwindSafe(|| run_engine(&linear, budget))) {
            Ok(Ok(solution)) => {
                let assignment = Assignment::from_values(solution.values);
                if let Err(e) = model.check(&assignment) {
                    warn!(event = "milp_rejected", error = %e);
                    return SolverResult::from_start(
                        model,
                        format!("engine solution rejected: {}", e),
                    );
                }
                if solution.proven {
                    SolverResult::optimal(model, assignment)
                } else {
                    let note = format!("{}; best incumbent kept", expired());
                    SolverResult::feasible(model, assignment, note)
                }
            }
            Ok(Err(ResolutionError::Infeasible)) => SolverResult::infeasible("model is infeasible"),
            Ok(Err(ResolutionError::Other(_))) => SolverResult::from_start(model, expired()),
            Ok(Err(e)) => SolverResult::from_start(model, format!("MILP engine failed: {}", e)),
            Err(_) => SolverResult::from_start(model, "MILP engine aborted"),
        }
    }
}

fn run_engine(model: &Model, budget: Duration) -> Result<EngineSolution, ResolutionError> {
    let mut vars = variables!();
    let lp_vars: Vec<LpVariable> = model
        .variables()
        .iter()
        .map(|v| {
            let def = match v.kind {
                VarKind::Binary => variable().binary(),
                VarKind::Integer => variable().integer().min(v.lower as f64).max(v.upper as f64),
            };
            vars.add(def.name(v.name.clone()))
        })
        .collect();

    let objective = to_expression(model.objective(), &lp_vars);
    let mut problem = vars
        .maximise(objective)
        .using(default_solver)
        .with_time_limit(budget.as_secs_f64());

    if let Some(start) = model.start().filter(|s| model.check(s).is_ok()) {
        let seed: Vec<(LpVariable, f64)> = lp_vars
            .iter()
            .zip(start.values())
            .map(|(&v, &value)| (v, value as f64))
            .collect();
        problem = problem.with_initial_solution(seed);
    }

    for row in model.constraints() {
        let lhs = to_expression(&row.expr, &lp_vars);
        let constraint = match row.cmp {
            Comparison::LessEq => lhs.leq(row.rhs),
            Comparison::Eq => lhs.eq(row.rhs),
            Comparison::GreaterEq => lhs.geq(row.rhs),
        };
        problem.add_constraint(constraint);
    }

    let solution = problem.solve()?;
    let proven = matches!(solution.status(), SolutionStatus::Optimal);
    Ok(EngineSolution {
        values: lp_vars
            .iter()
            .map(|&v| solution.value(v).round() as i64)
            .collect(),
        proven,
    })
}

fn to_expression(expr: &LinearExpr, vars: &[LpVariable]) -> Expression {
    expr.merged_terms()
        .into_iter()
        .fold(Expression::from(expr.constant()), |acc, (var, coef)| {
            acc + coef * vars[var.index()]
        })
}
