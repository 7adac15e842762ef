use std::fs;
use std::path::Path;

use podforge::{RoundPlanner, RoundRequest};
use tracing::{info, warn};

use super::{planner_config, to_json, Document};
use crate::error::CliError;
use crate::{OutputFormat, PlannerArgs};

/// Plans the request in `input` and renders it in `format`.
pub fn run(
    args: &PlannerArgs,
    format: OutputFormat,
    emit_lp: Option<&Path>,
    input: &str,
) -> Result<String, CliError> {
    let request: RoundRequest = serde_json::from_str(input).map_err(CliError::Input)?;
    let planner = RoundPlanner::new(planner_config(args)?);

    if let Some(path) = emit_lp {
        match planner.model(&request)? {
            Some(round) => {
                fs::write(path, round.model.to_lp_string())?;
                info!(event = "lp_written", path = %path.display());
            }
            None => warn!(event = "lp_skipped", reason = "round needs no model"),
        }
    }

    let outcome = planner.plan(&request)?;
    to_json(&Document::new(outcome, format))
}
