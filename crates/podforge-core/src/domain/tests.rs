//! Tests for domain types (requests, instances, outcomes).

use super::*;
use crate::error::PodForgeError;

fn players(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("p{}", i), i as i64)).collect()
}

// ============================================================================
// Request Parsing
// ============================================================================

#[test]
fn test_request_parses_camel_case_with_defaults() {
    let json = r#"{
        "players": [
            {"id": "a", "matchPoints": 3, "votes": {"c1": "DESIRED", "c2": "AVOID"}},
            {"id": "b", "matchPoints": 0, "votes": {}, "dropped": true, "priorAvoidCount": 2}
        ],
        "cubes": [{"id": "c1"}, {"id": "c2", "maxPlayers": 6}]
    }"#;

    let request: RoundRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.round_number, 1);
    assert_eq!(request.pod_sizes, None);
    assert!(request.used_cube_ids.is_empty());
    assert_eq!(request.players[0].vote_for("c1"), Vote::Desired);
    assert_eq!(request.players[0].vote_for("c2"), Vote::Avoid);
    assert_eq!(request.players[0].vote_for("c3"), Vote::Neutral);
    assert!(request.players[1].dropped);
    assert_eq!(request.players[1].prior_avoid_count, 2);
    assert_eq!(request.cubes[1].max_players, Some(6));
}

#[test]
fn test_request_rejects_unknown_vote() {
    let json = r#"{
        "players": [{"id": "a", "matchPoints": 3, "votes": {"c1": "LOVE"}}],
        "cubes": []
    }"#;
    assert!(serde_json::from_str::<RoundRequest>(json).is_err());
}

#[test]
fn test_request_rejects_missing_match_points() {
    let json = r#"{"players": [{"id": "a"}], "cubes": []}"#;
    assert!(serde_json::from_str::<RoundRequest>(json).is_err());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_well_formed_request() {
    let request = RoundRequest::new(players(8), vec![Cube::new("c1")]).with_pod_sizes(vec![8]);
    assert!(request.validate().is_ok());
}

#[test]
fn test_validate_rejects_duplicate_player() {
    let mut ps = players(3);
    ps[2].id = "p0".to_string();
    let request = RoundRequest::new(ps, vec![]);
    let err = request.validate().unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("duplicate player id 'p0'"));
}

#[test]
fn test_validate_rejects_duplicate_cube() {
    let request = RoundRequest::new(players(2), vec![Cube::new("c"), Cube::new("c")]);
    assert!(matches!(
        request.validate(),
        Err(PodForgeError::InvalidRequest(_))
    ));
}

#[test]
fn test_validate_rejects_zero_capacity() {
    let request = RoundRequest::new(players(2), vec![Cube::with_max_players("c", 0)]);
    assert!(request.validate().is_err());
}

#[test]
fn test_validate_rejects_pod_size_mismatch() {
    let mut ps = players(9);
    ps[8] = ps[8].clone().dropped();
    let ok = RoundRequest::new(ps.clone(), vec![]).with_pod_sizes(vec![8]);
    assert!(ok.validate().is_ok());

    let bad = RoundRequest::new(ps, vec![]).with_pod_sizes(vec![9]);
    let err = bad.validate().unwrap_err();
    assert!(err.to_string().contains("9 but there are 8 active players"));
}

#[test]
fn test_validate_rejects_zero_pod_size() {
    let request = RoundRequest::new(players(4), vec![]).with_pod_sizes(vec![4, 0]);
    assert!(request.validate().is_err());
}

#[test]
fn test_validate_rejects_non_finite_weight() {
    let mut request = RoundRequest::new(players(2), vec![]);
    request.score_want = Some(f64::NAN);
    assert!(request.validate().is_err());
}

// ============================================================================
// Instance
// ============================================================================

#[test]
fn test_instance_filters_dropped_and_used() {
    let mut ps = players(10);
    ps[3] = ps[3].clone().dropped();
    ps[4] = ps[4].clone().dropped();
    let request = RoundRequest::new(ps, vec![Cube::new("a"), Cube::new("b"), Cube::new("c")])
        .with_used_cube_ids(vec!["b".to_string()]);

    let instance = RoundInstance::from_request(&request, &ScoringWeights::default(), false).unwrap();
    assert_eq!(instance.player_count(), 8);
    assert_eq!(instance.pod_sizes, vec![8]);
    let cube_ids: Vec<&str> = instance.cubes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(cube_ids, vec!["a", "c"]);
    assert!(instance.players.iter().all(|p| p.is_active()));
}

#[test]
fn test_instance_refills_used_cubes_when_short() {
    let request = RoundRequest::new(players(16), vec![Cube::new("a"), Cube::new("b")])
        .with_used_cube_ids(vec!["a".to_string()]);

    let plain = RoundInstance::from_request(&request, &ScoringWeights::default(), false).unwrap();
    assert_eq!(plain.cube_count(), 1);
    assert_eq!(plain.cubeless_pod_count(), 1);

    let refilled = RoundInstance::from_request(&request, &ScoringWeights::default(), true).unwrap();
    let cube_ids: Vec<&str> = refilled.cubes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(cube_ids, vec!["b", "a"]);
}

#[test]
fn test_instance_resolves_weights_against_defaults() {
    let mut request = RoundRequest::new(players(2), vec![]);
    request.score_avoid = Some(-50.0);
    request.early_round_bonus = Some(0);
    let defaults = ScoringWeights::default();

    let instance = RoundInstance::from_request(&request, &defaults, false).unwrap();
    assert_eq!(instance.weights.score_avoid, -50.0);
    assert_eq!(instance.weights.early_round_bonus, 0);
    assert_eq!(instance.weights.score_want, defaults.score_want);
}

#[test]
fn test_instance_match_point_range() {
    let instance = RoundInstance::from_request(
        &RoundRequest::new(players(5), vec![]),
        &ScoringWeights::default(),
        false,
    )
    .unwrap();
    assert_eq!(instance.match_point_range(), Some((0, 4)));
}

// ============================================================================
// Outcome
// ============================================================================

#[test]
fn test_outcome_wire_formats() {
    let outcome = RoundOutcome {
        round_number: 2,
        pods: vec![
            PodAssignment {
                index: 0,
                size: 2,
                cube_id: Some("a".to_string()),
                player_ids: vec!["p0".to_string(), "p1".to_string()],
            },
            PodAssignment {
                index: 1,
                size: 2,
                cube_id: None,
                player_ids: vec!["p2".to_string(), "p3".to_string()],
            },
        ],
        objective: Some(12.5),
        status: Some(SolveStatus::Optimal),
        want_count: 1,
        avoid_count: 0,
        warnings: vec!["only 1 cube".to_string()],
    };

    let offline = serde_json::to_value(outcome.to_offline()).unwrap();
    assert_eq!(offline["pods"][0]["podNumber"], 1);
    assert_eq!(offline["pods"][0]["cubeId"], "a");
    assert_eq!(offline["pods"][1]["cubeId"], "");
    assert_eq!(offline["pods"][1]["playerIds"][1], "p3");
    assert_eq!(offline["warnings"][0], "only 1 cube");

    let assignment = serde_json::to_value(outcome.to_assignment()).unwrap();
    assert_eq!(assignment["cubeIds"][0], "a");
    assert!(assignment["cubeIds"][1].is_null());
    assert_eq!(assignment["objective"], 12.5);
}

#[test]
fn test_solve_status_serialization() {
    assert_eq!(
        serde_json::to_string(&SolveStatus::Feasible).unwrap(),
        "\"FEASIBLE\""
    );
    assert!(SolveStatus::Optimal.has_solution());
    assert!(!SolveStatus::Infeasible.has_solution());
    assert_eq!(SolveStatus::Error.to_string(), "ERROR");
}

#[test]
fn test_cube_fits() {
    let limited = Cube::with_max_players("a", 6);
    assert!(limited.fits(6));
    assert!(!limited.fits(8));
    assert!(Cube::new("b").fits(100));
}
