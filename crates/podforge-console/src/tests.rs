use tracing::Level;

use super::*;

fn visitor(event: &str) -> EventVisitor {
    EventVisitor {
        event: Some(event.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_duration_formatting() {
    assert_eq!(format_duration_ms(250), "250ms");
    assert_eq!(format_duration_ms(1500), "1.50s");
    assert_eq!(format_duration_ms(125_000), "2m 5s");
}

#[test]
fn test_objective_formatting() {
    assert!(format_objective(Some(-197.0)).contains("-197.00"));
    assert!(format_objective(Some(6.5)).contains("6.50"));
    assert!(format_objective(None).contains("N/A"));
}

#[test]
fn test_plan_start() {
    let mut v = visitor("plan_start");
    v.round = Some(3);
    v.players = Some(1234);
    v.pods = Some(154);
    v.cubes = Some(160);
    v.backend = Some("milp".to_string());

    let output = format_event(&v, Level::INFO);
    assert!(output.contains("Round"));
    assert!(output.contains("1,234"));
    assert!(output.contains("milp"));
}

#[test]
fn test_solve_end_shows_status_and_message() {
    let mut v = visitor("solve_end");
    v.status = Some("FEASIBLE".to_string());
    v.objective = Some(12.0);
    v.message = Some("time budget of 30000 ms expired; using warm start".to_string());

    let output = format_event(&v, Level::INFO);
    assert!(output.contains("FEASIBLE"));
    assert!(output.contains("12.00"));
    assert!(output.contains("using warm start"));
}

#[test]
fn test_plan_end_summary() {
    let mut v = visitor("plan_end");
    v.round = Some(1);
    v.status = Some("OPTIMAL".to_string());
    v.want_count = Some(17);
    v.avoid_count = Some(2);
    v.warnings = Some(0);

    let output = format_event(&v, Level::INFO);
    assert!(output.contains("planned"));
    assert!(output.contains("Players on desired cube:"));
    assert!(output.contains("17"));
    assert!(output.contains("╚"));
}

#[test]
fn test_short_circuit_plan_end_shows_warning() {
    let mut v = visitor("plan_end");
    v.round = Some(1);
    v.warning = Some("no cubes available; pods left unassigned".to_string());

    let output = format_event(&v, Level::WARN);
    assert!(output.contains("no cubes available"));
    assert!(!output.contains("╔"));
}

#[test]
fn test_steps_only_at_trace() {
    let mut v = visitor("step");
    v.candidate = Some("SwapPlayers { a: 0, b: 3 }".to_string());
    v.score = Some(4.0);

    assert!(format_event(&v, Level::DEBUG).is_empty());
    assert!(format_event(&v, Level::TRACE).contains("SwapPlayers"));
}

#[test]
fn test_unknown_events_are_silent() {
    assert!(format_event(&visitor("something_else"), Level::INFO).is_empty());
    assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
}

#[test]
fn test_init_is_idempotent() {
    init();
    init();
    tracing::info!(target: "podforge_solver::planner", event = "plan_start", round = 1u64);
}

#[test]
fn test_lp_events() {
    let mut written = visitor("lp_written");
    written.path = Some("round.lp".to_string());
    assert!(format_event(&written, Level::INFO).contains("round.lp"));

    let mut skipped = visitor("lp_skipped");
    skipped.reason = Some("round needs no model".to_string());
    assert!(format_event(&skipped, Level::WARN).contains("round needs no model"));
}
