use std::io;

use podforge::{ConfigError, PodForgeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("malformed input: {0}")]
    Input(serde_json::Error),

    #[error(transparent)]
    Plan(#[from] PodForgeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode output: {0}")]
    Output(serde_json::Error),
}

impl CliError {
    /// Process exit status: 2 for malformed input, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) => 2,
            CliError::Plan(e) if e.is_client_error() => 2,
            _ => 1,
        }
    }
}
