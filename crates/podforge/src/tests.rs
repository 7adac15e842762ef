use podforge_test::{assert_round_invariants, shortfall_scenario};

use crate::prelude::*;

#[test]
fn test_plan_round_with_heuristic_backend() {
    let request = shortfall_scenario();
    let config = PlannerConfig::new()
        .with_backend(SolverBackend::Heuristic)
        .with_random_seed(3)
        .with_termination_seconds(1);

    let outcome = plan_round_with(&request, config).unwrap();
    assert_round_invariants(&request, &outcome);

    let offline = outcome.to_offline();
    assert_eq!(offline.pods.len(), 3);
    assert_eq!(offline.pods.iter().filter(|p| p.cube_id.is_empty()).count(), 2);
    assert_eq!(offline.warnings.len(), 1);
}

#[test]
fn test_reexported_sizing() {
    assert_eq!(pod_sizes_for(24), vec![8, 8, 8]);
    assert_eq!(pod_sizes_for(0), Vec::<usize>::new());
}
