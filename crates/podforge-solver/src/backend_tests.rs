//! Tests for solver backends and the warm start.

use std::time::Duration;

use podforge_config::{AcceptorType, WarmStartConfig};
use podforge_core::{RoundInstance, RoundRequest, ScoringWeights, SolveStatus};
use podforge_model::{Constraint, LinearExpr, Model, RoundModel};
use podforge_test::{preference_scenario, shortfall_scenario, tiered_scenario};

use crate::adapter::{Solver, SolverResult};
use crate::incumbent::IncumbentSolver;
use crate::milp::MilpSolver;
use crate::warm_start::WarmStart;

fn setup(request: &RoundRequest) -> (RoundInstance, RoundModel) {
    let instance = RoundInstance::from_request(request, &ScoringWeights::default(), false).unwrap();
    let round = RoundModel::build(&instance).unwrap();
    (instance, round)
}

fn knapsack() -> Model {
    let mut model = Model::new();
    let a = model.add_binary("a").unwrap();
    let b = model.add_binary("b").unwrap();
    let c = model.add_binary("c").unwrap();
    model.add_constraint(Constraint::less_eq(
        "weight",
        LinearExpr::new()
            .with_term(a, 3.0)
            .with_term(b, 4.0)
            .with_term(c, 2.0),
        6.0,
    ));
    model.set_objective(
        LinearExpr::new()
            .with_term(a, 4.0)
            .with_term(b, 5.0)
            .with_term(c, 3.0),
    );
    model
}

#[test]
fn test_milp_solves_small_model() {
    let model = knapsack();
    let result = MilpSolver::new().solve(&model, Duration::from_secs(10));
    assert_eq!(result.status, SolveStatus::Optimal);
    assert_eq!(result.objective, Some(8.0));
    let assignment = result.assignment.unwrap();
    assert_eq!(assignment.values(), &[0, 1, 1]);
}

#[test]
fn test_milp_handles_indicator_rows() {
    let mut model = Model::new();
    let on = model.add_binary("on").unwrap();
    let level = model.add_integer("level", 0, 10).unwrap();
    model.add_constraint(
        Constraint::greater_eq("floor", LinearExpr::new().with_term(level, 1.0), 7.0).only_if(on),
    );
    model.set_objective(LinearExpr::new().with_term(on, 10.0).with_term(level, -1.0));

    let result = MilpSolver::new().solve(&model, Duration::from_secs(10));
    assert_eq!(result.status, SolveStatus::Optimal);
    assert_eq!(result.objective, Some(3.0));
}

#[test]
fn test_milp_reports_infeasible() {
    let mut model = Model::new();
    let a = model.add_binary("a").unwrap();
    model.add_constraint(Constraint::greater_eq(
        "impossible",
        LinearExpr::new().with_term(a, 1.0),
        2.0,
    ));
    let result = MilpSolver::new().solve(&model, Duration::from_secs(10));
    assert_eq!(result.status, SolveStatus::Infeasible);
    assert!(result.assignment.is_none());
}

#[test]
fn test_milp_preference_scenario() {
    let (_, round) = setup(&preference_scenario());
    let result = MilpSolver::new().solve(&round.model, Duration::from_secs(10));
    assert_eq!(result.status, SolveStatus::Optimal);
    let assignment = result.assignment.unwrap();
    assert!(assignment.is_set(round.index.y[0][0]));
    assert!((result.objective.unwrap() - 6.5).abs() < 1e-6);
}

#[test]
fn test_zero_budget_falls_back_to_start() {
    let (instance, mut round) = setup(&shortfall_scenario());
    let warm_start = WarmStart::new(WarmStartConfig::default(), Some(3));
    assert!(warm_start
        .install(&instance, &mut round, Duration::from_millis(50))
        .is_some());

    let result = MilpSolver::new().solve(&round.model, Duration::ZERO);
    assert!(result.status.has_solution());
    assert!(round.model.check(result.assignment.as_ref().unwrap()).is_ok());
}

#[test]
fn test_zero_budget_without_start_is_error() {
    let (_, round) = setup(&tiered_scenario());
    let result = MilpSolver::new().solve(&round.model, Duration::ZERO);
    assert_eq!(result.status, SolveStatus::Error);
    assert!(result.assignment.is_none());
    assert!(result.message.unwrap().contains("expired"));
}

#[test]
fn test_incumbent_requires_start() {
    let (instance, mut round) = setup(&preference_scenario());
    let result = IncumbentSolver.solve(&round.model, Duration::from_secs(1));
    assert_eq!(result.status, SolveStatus::Error);
    assert!(!IncumbentSolver.searches());
    assert!(MilpSolver::new().searches());

    WarmStart::new(WarmStartConfig::default(), Some(1))
        .install(&instance, &mut round, Duration::from_millis(50))
        .unwrap();
    let result = IncumbentSolver.solve(&round.model, Duration::from_secs(1));
    assert_eq!(result.status, SolveStatus::Feasible);
    assert!((result.objective.unwrap() - 6.5).abs() < 1e-6);
}

#[test]
fn test_from_start_without_start() {
    let result = SolverResult::from_start(&knapsack(), "budget expired");
    assert_eq!(result.status, SolveStatus::Error);
    assert_eq!(result.message.as_deref(), Some("budget expired"));
}

#[test]
fn test_warm_start_is_reproducible() {
    let (instance, round) = setup(&tiered_scenario());
    let config = WarmStartConfig {
        step_count_limit: Some(2_000),
        ..WarmStartConfig::default()
    };
    let first = WarmStart::new(config.clone(), Some(42))
        .search(&instance, &round, Duration::from_secs(60))
        .unwrap();
    let second = WarmStart::new(config, Some(42))
        .search(&instance, &round, Duration::from_secs(60))
        .unwrap();
    assert_eq!(first.0, second.0);
}

#[test]
fn test_warm_start_hill_climbing_never_worse_than_construction() {
    let (instance, round) = setup(&tiered_scenario());
    let config = WarmStartConfig {
        acceptor: AcceptorType::HillClimbing,
        step_count_limit: Some(500),
        ..WarmStartConfig::default()
    };
    let problem = crate::heuristic::PlanProblem::new(
        &instance,
        round.index.columns,
        &round.coefficients,
    );
    let constructed = crate::phase::construction::ConstructionPhase::construct(&problem)
        .unwrap()
        .score(&problem);
    let (_, best) = WarmStart::new(config, Some(5))
        .search(&instance, &round, Duration::from_secs(60))
        .unwrap();
    assert!(best >= constructed);
}
