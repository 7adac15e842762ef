use podforge::pod_sizes_for;

use crate::error::CliError;

pub fn run(players: usize) -> Result<String, CliError> {
    serde_json::to_string(&pod_sizes_for(players)).map_err(CliError::Output)
}
