use podforge::{RoundPlanner, RoundRequest};

use super::{planner_config, to_json, Document};
use crate::error::CliError;
use crate::{OutputFormat, PlannerArgs};

/// Plans every request in the JSON array `input`, in parallel.
///
/// The first failing request fails the whole batch.
pub fn run(args: &PlannerArgs, format: OutputFormat, input: &str) -> Result<String, CliError> {
    let requests: Vec<RoundRequest> = serde_json::from_str(input).map_err(CliError::Input)?;
    let planner = RoundPlanner::new(planner_config(args)?);

    let documents = planner
        .plan_batch(&requests)
        .into_iter()
        .map(|result| result.map(|outcome| Document::new(outcome, format)))
        .collect::<Result<Vec<_>, _>>()?;
    to_json(&documents)
}
