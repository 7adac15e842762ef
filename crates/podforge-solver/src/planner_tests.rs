//! Tests for the round planner.

use std::time::{Duration, Instant};

use podforge_config::{PlannerConfig, SolverBackend};
use podforge_core::{Cube, Player, RoundRequest, SolveStatus, Vote};
use podforge_model::Model;
use podforge_test::{
    assert_round_invariants, cubes, field, limited_cube, preference_scenario,
    shortfall_scenario, tiered_scenario,
};

use crate::adapter::{Solver, SolverResult};
use crate::planner::RoundPlanner;

fn milp_planner() -> RoundPlanner {
    RoundPlanner::new(
        PlannerConfig::new()
            .with_random_seed(7)
            .with_termination_seconds(5),
    )
}

fn heuristic_planner() -> RoundPlanner {
    RoundPlanner::new(
        PlannerConfig::new()
            .with_random_seed(7)
            .with_termination_seconds(2)
            .with_backend(SolverBackend::Heuristic),
    )
}

#[derive(Debug)]
struct FailingSolver;

impl Solver for FailingSolver {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn solve(&self, _model: &Model, _budget: Duration) -> SolverResult {
        SolverResult::error("engine unavailable")
    }
}

#[test]
fn test_preference_scenario_assigns_desired_cube() {
    for planner in [milp_planner(), heuristic_planner()] {
        let request = preference_scenario();
        let outcome = planner.plan(&request).unwrap();

        assert_round_invariants(&request, &outcome);
        assert_eq!(outcome.pods.len(), 1);
        assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("A"));
        assert_eq!(outcome.pods[0].player_ids, vec!["p1", "p2"]);
        assert_eq!(outcome.want_count, 1);
        assert_eq!(outcome.avoid_count, 0);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.status.is_some_and(SolveStatus::has_solution));
    }
}

#[test]
fn test_milp_preference_scenario_is_optimal() {
    let outcome = milp_planner().plan(&preference_scenario()).unwrap();
    assert_eq!(outcome.status, Some(SolveStatus::Optimal));
    assert!((outcome.objective.unwrap() - 6.5).abs() < 1e-6);
}

#[test]
fn test_cube_shortfall() {
    for planner in [milp_planner(), heuristic_planner()] {
        let request = shortfall_scenario();
        let outcome = planner.plan(&request).unwrap();

        assert_round_invariants(&request, &outcome);
        let with_cube: Vec<_> = outcome.pods.iter().filter(|p| p.cube_id.is_some()).collect();
        assert_eq!(with_cube.len(), 1);
        assert_eq!(with_cube[0].cube_id.as_deref(), Some("c0"));
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("2 pods have no cube"));
    }
}

#[test]
fn test_tier_fairness_across_tiers() {
    for planner in [milp_planner(), heuristic_planner()] {
        let request = tiered_scenario();
        let outcome = planner.plan(&request).unwrap();

        let sizes: Vec<usize> = outcome.pods.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![6, 6, 8]);
        assert_round_invariants(&request, &outcome);
    }
}

#[test]
fn test_capacity_respected() {
    let mut players = field(14);
    for player in players.iter_mut() {
        player.votes.insert("small".to_string(), Vote::Desired);
    }
    let request = RoundRequest::new(players, vec![limited_cube("small", 6), Cube::new("big")])
        .with_pod_sizes(vec![8, 6]);
    let outcome = heuristic_planner().plan(&request).unwrap();

    assert_round_invariants(&request, &outcome);
    assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("big"));
    assert_eq!(outcome.pods[1].cube_id.as_deref(), Some("small"));
    assert_eq!(outcome.want_count, 6);
}

#[test]
fn test_avoid_counted() {
    let players = vec![
        Player::new("a", 0).with_vote("only", Vote::Avoid),
        Player::new("b", 0),
    ];
    let request = RoundRequest::new(players, vec![Cube::new("only")]).with_pod_sizes(vec![2]);
    let outcome = heuristic_planner().plan(&request).unwrap();
    assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("only"));
    assert_eq!(outcome.avoid_count, 1);
}

#[test]
fn test_too_few_players() {
    let request = RoundRequest::new(vec![Player::new("solo", 3)], cubes(2));
    let outcome = milp_planner().plan(&request).unwrap();
    assert!(outcome.pods.is_empty());
    assert_eq!(outcome.status, None);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("too few active players"));
}

#[test]
fn test_no_cubes() {
    let request = RoundRequest::new(field(16), Vec::new());
    let outcome = milp_planner().plan(&request).unwrap();
    assert_eq!(outcome.pods.len(), 2);
    assert!(outcome
        .pods
        .iter()
        .all(|p| p.size == 8 && p.player_ids.is_empty() && p.cube_id.is_none()));
    assert!(outcome.warnings[0].contains("no cubes"));
}

#[test]
fn test_dropped_players_and_used_cubes() {
    let mut players = field(10);
    players[8] = players[8].clone().dropped();
    players[9] = players[9].clone().dropped();
    let request = RoundRequest::new(players, cubes(2))
        .with_used_cube_ids(vec!["c0".to_string()])
        .with_round_number(2);
    let outcome = heuristic_planner().plan(&request).unwrap();

    assert_round_invariants(&request, &outcome);
    assert_eq!(outcome.round_number, 2);
    assert_eq!(outcome.pods.len(), 1);
    assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("c1"));
}

#[test]
fn test_refill_used_cubes() {
    let request = RoundRequest::new(field(16), cubes(2))
        .with_used_cube_ids(vec!["c0".to_string()]);
    let mut config = PlannerConfig::new()
        .with_random_seed(1)
        .with_termination_seconds(2)
        .with_backend(SolverBackend::Heuristic);
    config.solver.refill_used_cubes = true;
    let outcome = RoundPlanner::new(config).plan(&request).unwrap();

    assert_round_invariants(&request, &outcome);
    assert!(outcome.warnings.is_empty());
    assert!(outcome.pods.iter().all(|p| p.cube_id.is_some()));
}

#[test]
fn test_invalid_request_is_rejected() {
    let request = RoundRequest::new(field(4), cubes(1)).with_pod_sizes(vec![3]);
    let err = milp_planner().plan(&request).unwrap_err();
    assert!(err.is_client_error());
}

#[test]
fn test_solver_failure_falls_back_to_empty_pods() {
    let planner = RoundPlanner::with_solver(
        PlannerConfig::new().with_termination_seconds(1),
        Box::new(FailingSolver),
    );
    let outcome = planner.plan(&shortfall_scenario()).unwrap();

    assert_eq!(outcome.status, Some(SolveStatus::Error));
    assert_eq!(outcome.pods.len(), 3);
    assert!(outcome.pods.iter().all(|p| p.player_ids.is_empty()));
    assert_eq!(outcome.objective, None);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.contains("ERROR: engine unavailable")));
}

#[test]
fn test_infeasible_capacity() {
    let request = RoundRequest::new(
        field(16),
        vec![limited_cube("a", 6), limited_cube("b", 6)],
    );
    let outcome = milp_planner().plan(&request).unwrap();

    assert_eq!(outcome.status, Some(SolveStatus::Infeasible));
    assert!(outcome.pods.iter().all(|p| p.player_ids.is_empty()));
    assert!(outcome.warnings.iter().any(|w| w.contains("INFEASIBLE")));
}

#[test]
fn test_plan_batch_keeps_order() {
    let requests = vec![
        preference_scenario(),
        RoundRequest::new(field(4), cubes(1)).with_pod_sizes(vec![3]),
        shortfall_scenario(),
    ];
    let results = heuristic_planner().plan_batch(&requests);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().pods.len(), 1);
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().pods.len(), 3);
}

#[test]
fn test_model_for_lp_export() {
    let planner = milp_planner();
    let round = planner.model(&preference_scenario()).unwrap().unwrap();
    assert!(round.model.to_lp_string().contains("z_0_0_0"));

    let solo = RoundRequest::new(vec![Player::new("solo", 0)], cubes(1));
    assert!(planner.model(&solo).unwrap().is_none());
}

#[test]
fn test_milp_batch_returns_within_budget() {
    let planner = RoundPlanner::new(
        PlannerConfig::new()
            .with_random_seed(7)
            .with_termination_millis(300),
    );
    let requests = vec![tiered_scenario(), tiered_scenario(), preference_scenario()];

    let started = Instant::now();
    let results = planner.plan_batch(&requests);
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(results.iter().all(Result::is_ok));

    // The engine runs on the caller's thread and stops at its own deadline.
    #[cfg(target_os = "linux")]
    {
        let engine_threads = std::fs::read_dir("/proc/self/task")
            .unwrap()
            .filter_map(|task| std::fs::read_to_string(task.ok()?.path().join("comm")).ok())
            .filter(|name| name.trim() == "podforge-milp")
            .count();
        assert_eq!(engine_threads, 0);
    }
}


#[test]
fn test_long_avoid_history_keeps_objective_finite() {
    let players = vec![
        Player::new("p1", 0)
            .with_vote("A", Vote::Avoid)
            .with_prior_avoid_count(1000),
        Player::new("p2", 0),
    ];
    let request = RoundRequest::new(players, vec![Cube::new("A"), Cube::new("B")])
        .with_pod_sizes(vec![2]);

    for planner in [milp_planner(), heuristic_planner()] {
        let outcome = planner.plan(&request).unwrap();
        assert_round_invariants(&request, &outcome);
        assert_eq!(outcome.pods[0].cube_id.as_deref(), Some("B"));
        assert!(outcome.objective.is_some_and(f64::is_finite));
    }
}
