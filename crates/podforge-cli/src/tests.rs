use std::fs;

use clap::Parser;

use crate::commands::{batch, planner_config, sizes, solve};
use crate::{Backend, Cli, Commands, OutputFormat, PlannerArgs};

const PREFERENCE_REQUEST: &str = r#"{
    "players": [
        { "id": "p1", "matchPoints": 0, "votes": { "A": "DESIRED", "B": "AVOID" } },
        { "id": "p2", "matchPoints": 0 }
    ],
    "cubes": [{ "id": "A" }, { "id": "B" }],
    "podSizes": [2]
}"#;

fn fast_args() -> PlannerArgs {
    PlannerArgs {
        config: None,
        time_limit: Some(1),
        backend: Some(Backend::Heuristic),
        seed: Some(11),
    }
}

#[test]
fn test_parse_solve_arguments() {
    let cli = Cli::try_parse_from([
        "podforge",
        "solve",
        "--format",
        "report",
        "--time-limit",
        "5",
        "--backend",
        "heuristic",
        "--quiet",
    ])
    .unwrap();

    assert!(cli.quiet);
    match cli.command {
        Commands::Solve {
            planner, format, ..
        } => {
            assert_eq!(format, OutputFormat::Report);
            assert_eq!(planner.time_limit, Some(5));
            assert_eq!(planner.backend, Some(Backend::Heuristic));
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["podforge", "solve", "--format", "xml"]).is_err());
}

#[test]
fn test_solve_offline_document() {
    let output = solve::run(&fast_args(), OutputFormat::Offline, None, PREFERENCE_REQUEST).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(doc["pods"][0]["podNumber"], 1);
    assert_eq!(doc["pods"][0]["podSize"], 2);
    assert_eq!(doc["pods"][0]["cubeId"], "A");
    assert_eq!(doc["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_solve_assignment_and_report_documents() {
    let output =
        solve::run(&fast_args(), OutputFormat::Assignment, None, PREFERENCE_REQUEST).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(doc["cubeIds"][0], "A");
    assert_eq!(doc["pods"][0][0], "p1");

    let output = solve::run(&fast_args(), OutputFormat::Report, None, PREFERENCE_REQUEST).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(doc["wantCount"], 1);
    assert_eq!(doc["status"], "FEASIBLE");
}

#[test]
fn test_malformed_input_exits_with_2() {
    let err = solve::run(&fast_args(), OutputFormat::Offline, None, "{ not json").unwrap_err();
    assert_eq!(err.exit_code(), 2);

    let unknown_vote = r#"{"players":[{"id":"a","matchPoints":0,"votes":{"A":"LOVE"}}],"cubes":[]}"#;
    let err = solve::run(&fast_args(), OutputFormat::Offline, None, unknown_vote).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_request_exits_with_2() {
    let request = r#"{
        "players": [{ "id": "a", "matchPoints": 0 }, { "id": "b", "matchPoints": 0 }],
        "cubes": [{ "id": "A" }],
        "podSizes": [3]
    }"#;
    let err = solve::run(&fast_args(), OutputFormat::Offline, None, request).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("podSizes"));
}

#[test]
fn test_missing_config_file_exits_with_1() {
    let args = PlannerArgs {
        config: Some("/nonexistent/podforge.toml".into()),
        ..fast_args()
    };
    let err = planner_config(&args).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.toml");
    fs::write(
        &path,
        "random_seed = 5\n[termination]\nseconds_spent_limit = 20\n[solver]\nbackend = \"milp\"\n",
    )
    .unwrap();

    let args = PlannerArgs {
        config: Some(path),
        time_limit: Some(2),
        backend: Some(Backend::Heuristic),
        seed: None,
    };
    let config = planner_config(&args).unwrap();
    assert_eq!(config.time_limit(), std::time::Duration::from_secs(2));
    assert_eq!(config.solver.backend, podforge::SolverBackend::Heuristic);
    assert_eq!(config.random_seed, Some(5));
}

#[test]
fn test_emit_lp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.lp");

    solve::run(&fast_args(), OutputFormat::Offline, Some(&path), PREFERENCE_REQUEST).unwrap();
    let lp = fs::read_to_string(&path).unwrap();
    assert!(lp.starts_with("\\ podforge round model"));
    assert!(lp.contains("one_pod_0:"));
    assert!(lp.trim_end().ends_with("End"));
}

#[test]
fn test_batch() {
    let input = format!(
        "[{}, {}]",
        PREFERENCE_REQUEST,
        r#"{"players":[{"id":"solo","matchPoints":0}],"cubes":[{"id":"A"}]}"#
    );
    let output = batch::run(&fast_args(), OutputFormat::Offline, &input).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&output).unwrap();

    let rounds = doc.as_array().unwrap();
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0]["pods"][0]["cubeId"], "A");
    assert_eq!(rounds[1]["pods"].as_array().unwrap().len(), 0);
    assert!(rounds[1]["warnings"][0]
        .as_str()
        .unwrap()
        .contains("too few active players"));
}

#[test]
fn test_batch_rejects_non_array() {
    let err = batch::run(&fast_args(), OutputFormat::Offline, PREFERENCE_REQUEST).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_sizes() {
    assert_eq!(sizes::run(17).unwrap(), "[9,8]");
    assert_eq!(sizes::run(24).unwrap(), "[8,8,8]");
    assert_eq!(sizes::run(0).unwrap(), "[]");
}
