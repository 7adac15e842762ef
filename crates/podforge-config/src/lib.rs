//! Configuration system for PodForge.
//!
//! Load planner configuration from TOML or YAML files to control the time
//! budget, the solver backend, the warm-start search and the default
//! scoring weights without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use podforge_config::{PlannerConfig, SolverBackend};
//! use std::time::Duration;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 10
//!
//!     [solver]
//!     backend = "heuristic"
//!
//!     [warm_start]
//!     acceptor = "hill_climbing"
//!
//!     [scoring]
//!     score_avoid = -150.0
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Duration::from_secs(10));
//! assert_eq!(config.solver.backend, SolverBackend::Heuristic);
//! assert_eq!(config.scoring.score_avoid, -150.0);
//! assert_eq!(config.scoring.score_want, 5.0);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use podforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("podforge.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use podforge_core::ScoringWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time budget used when no limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Random seed for reproducible warm starts.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Wall-clock budget per round.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// Backend selection.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Native warm-start search.
    #[serde(default)]
    pub warm_start: WarmStartConfig,

    /// Weights used when a request leaves them out.
    #[serde(default)]
    pub scoring: ScoringWeights,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml`, TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = TerminationConfig {
            seconds_spent_limit: Some(seconds),
            millis_spent_limit: None,
        };
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = TerminationConfig {
            seconds_spent_limit: None,
            millis_spent_limit: Some(millis),
        };
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the solver backend.
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.solver.backend = backend;
        self
    }

    /// Sets the warm-start configuration.
    pub fn with_warm_start(mut self, warm_start: WarmStartConfig) -> Self {
        self.warm_start = warm_start;
        self
    }

    /// Returns the per-round time budget.
    pub fn time_limit(&self) -> Duration {
        self.termination.time_limit().unwrap_or(DEFAULT_TIME_LIMIT)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ws = &self.warm_start;
        if !(ws.time_fraction > 0.0 && ws.time_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "warm_start.time_fraction must be in (0, 1], got {}",
                ws.time_fraction
            )));
        }
        if ws.late_acceptance_size == 0 {
            return Err(ConfigError::Invalid(
                "warm_start.late_acceptance_size must be positive".to_string(),
            ));
        }
        let weights = [
            ("score_want", self.scoring.score_want),
            ("score_avoid", self.scoring.score_avoid),
            ("score_neutral", self.scoring.score_neutral),
            ("match_point_penalty_weight", self.scoring.match_point_penalty_weight),
            ("lower_standing_bonus", self.scoring.lower_standing_bonus),
            ("repeat_avoid_multiplier", self.scoring.repeat_avoid_multiplier),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "scoring.{} must be finite",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend per round.
    pub seconds_spent_limit: Option<u64>,

    /// Additional milliseconds, for sub-second budgets.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

/// Solver backend selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    pub backend: SolverBackend,

    /// Re-admit cubes from `usedCubeIds` when fewer cubes than pods remain.
    pub refill_used_cubes: bool,
}

/// Solver backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    /// Exact MILP search seeded with the warm start.
    #[default]
    Milp,

    /// Warm start only.
    Heuristic,
}

/// Native warm-start search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct WarmStartConfig {
    pub enabled: bool,

    /// Share of the round budget given to the warm start.
    pub time_fraction: f64,

    pub acceptor: AcceptorType,

    /// Size of the late acceptance list.
    pub late_acceptance_size: usize,

    /// Maximum number of local search steps.
    pub step_count_limit: Option<u64>,

    /// Maximum steps without a new best score.
    pub unimproved_step_count_limit: Option<u64>,
}

impl Default for WarmStartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            time_fraction: 0.1,
            acceptor: AcceptorType::LateAcceptance,
            late_acceptance_size: 400,
            step_count_limit: Some(100_000),
            unimproved_step_count_limit: Some(5_000),
        }
    }
}

/// Acceptor types for the warm-start local search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptorType {
    #[default]
    LateAcceptance,
    HillClimbing,
}
