//! Planner entry point that hides all internal wiring.

use podforge_config::PlannerConfig;
use podforge_core::{Result, RoundOutcome, RoundRequest};
use podforge_solver::RoundPlanner;

/// Configuration file read by [`plan_round`] from the working directory.
pub const CONFIG_FILE: &str = "podforge.toml";

/// Plans one round with the configuration in [`CONFIG_FILE`], or the
/// defaults when that file is missing or invalid.
pub fn plan_round(request: &RoundRequest) -> Result<RoundOutcome> {
    let config = PlannerConfig::load(CONFIG_FILE).unwrap_or_default();
    plan_round_with(request, config)
}

/// Plans one round with an explicit configuration.
pub fn plan_round_with(request: &RoundRequest, config: PlannerConfig) -> Result<RoundOutcome> {
    #[cfg(feature = "console")]
    podforge_console::init();

    RoundPlanner::new(config).plan(request)
}
