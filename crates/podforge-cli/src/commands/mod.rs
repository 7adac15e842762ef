pub mod batch;
pub mod sizes;
pub mod solve;

use podforge::{PlannerConfig, RoundOutcome, SolverBackend, CONFIG_FILE};
use serde::Serialize;

use crate::error::CliError;
use crate::{Backend, OutputFormat, PlannerArgs};

/// Resolves the planner configuration for a command.
///
/// An explicit `--config` must load; the implicit `podforge.toml` falls back
/// to defaults.
pub fn planner_config(args: &PlannerArgs) -> Result<PlannerConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::load(CONFIG_FILE).unwrap_or_default(),
    };
    if let Some(seconds) = args.time_limit {
        config = config.with_termination_seconds(seconds);
    }
    if let Some(backend) = args.backend {
        config = config.with_backend(match backend {
            Backend::Milp => SolverBackend::Milp,
            Backend::Heuristic => SolverBackend::Heuristic,
        });
    }
    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    Ok(config)
}

/// The document written for one outcome.
#[derive(Serialize)]
#[serde(untagged)]
pub enum Document {
    Offline(podforge::OfflineResponse),
    Assignment(podforge::AssignmentResponse),
    Report(RoundOutcome),
}

impl Document {
    pub fn new(outcome: RoundOutcome, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Offline => Document::Offline(outcome.to_offline()),
            OutputFormat::Assignment => Document::Assignment(outcome.to_assignment()),
            OutputFormat::Report => Document::Report(outcome),
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::Output)
}
