//! Tests for result extraction.

use podforge_core::{Cube, PodForgeError, RoundInstance, RoundRequest, ScoringWeights};
use podforge_model::RoundModel;
use podforge_test::{field, shortfall_scenario};

use crate::extract::ResultExtractor;

fn setup(request: &RoundRequest) -> (RoundInstance, RoundModel) {
    let instance = RoundInstance::from_request(request, &ScoringWeights::default(), false).unwrap();
    let round = RoundModel::build(&instance).unwrap();
    (instance, round)
}

#[test]
fn test_extract_shortfall_plan() {
    let (instance, round) = setup(&shortfall_scenario());
    let assignment = round.index.encode(
        &round.model,
        &[2, 0, 1, 2, 0, 1],
        &[1, 0, 2],
        &instance.match_points(),
    );
    let extractor = ResultExtractor::new(&instance, &round.index);
    let pods = extractor.extract(&assignment).unwrap();

    assert_eq!(pods.len(), 3);
    assert_eq!(pods[0].player_ids, vec!["p1", "p4"]);
    assert_eq!(pods[0].cube_id, None);
    assert_eq!(pods[1].player_ids, vec!["p2", "p5"]);
    assert_eq!(pods[1].cube_id.as_deref(), Some("c0"));
    assert_eq!(pods[2].player_ids, vec!["p0", "p3"]);
    assert_eq!(pods[2].cube_id, None);
}

#[test]
fn test_extract_is_idempotent() {
    let (instance, round) = setup(&shortfall_scenario());
    let assignment = round.index.encode(
        &round.model,
        &[0, 0, 1, 1, 2, 2],
        &[0, 1, 2],
        &instance.match_points(),
    );
    let extractor = ResultExtractor::new(&instance, &round.index);
    assert_eq!(
        extractor.extract(&assignment).unwrap(),
        extractor.extract(&assignment).unwrap()
    );
}

#[test]
fn test_extract_rejects_wrong_cardinality() {
    let (instance, round) = setup(&shortfall_scenario());
    let mut assignment = round.index.encode(
        &round.model,
        &[0, 0, 1, 1, 2, 2],
        &[0, 1, 2],
        &instance.match_points(),
    );
    assignment.set(round.index.x[0][0], 0);
    assignment.set(round.index.x[0][1], 1);

    let err = ResultExtractor::new(&instance, &round.index)
        .extract(&assignment)
        .unwrap_err();
    assert!(matches!(err, PodForgeError::Internal(_)));
}

#[test]
fn test_extract_rejects_double_placement() {
    let request = RoundRequest::new(field(4), vec![Cube::new("a"), Cube::new("b")])
        .with_pod_sizes(vec![2, 2]);
    let (instance, round) = setup(&request);
    let mut assignment = round.index.encode(
        &round.model,
        &[0, 0, 1, 1],
        &[0, 1],
        &instance.match_points(),
    );
    // p0 in both pods, p2 in none
    assignment.set(round.index.x[0][1], 1);
    assignment.set(round.index.x[2][1], 0);

    let err = ResultExtractor::new(&instance, &round.index)
        .extract(&assignment)
        .unwrap_err();
    assert!(err.to_string().contains("player 'p0' placed 2 times"));
}

#[test]
fn test_extract_rejects_shared_cube() {
    let request = RoundRequest::new(field(4), vec![Cube::new("a"), Cube::new("b")])
        .with_pod_sizes(vec![2, 2]);
    let (instance, round) = setup(&request);
    let assignment = round.index.encode(
        &round.model,
        &[0, 0, 1, 1],
        &[0, 0],
        &instance.match_points(),
    );
    let err = ResultExtractor::new(&instance, &round.index)
        .extract(&assignment)
        .unwrap_err();
    assert!(err.to_string().contains("cube 'a' assigned to more than one pod"));
}

#[test]
fn test_empty_pods() {
    let (instance, round) = setup(&shortfall_scenario());
    let pods = ResultExtractor::new(&instance, &round.index).empty_pods();
    assert_eq!(pods.len(), 3);
    assert!(pods.iter().all(|p| p.player_ids.is_empty() && p.cube_id.is_none()));
    assert_eq!(pods[1].size, 2);
}
