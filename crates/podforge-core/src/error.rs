//! Error types for PodForge

use thiserror::Error;

/// Main error type for PodForge operations
#[derive(Debug, Error)]
pub enum PodForgeError {
    /// The request is malformed or violates a precondition (client error)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The optimization model could not be built
    #[error("Model error: {0}")]
    Model(String),

    /// The solver backend failed in a way that could not be absorbed
    #[error("Solver error: {0}")]
    Solver(String),

    /// A decoded solution broke a result invariant (should not occur in normal operation)
    #[error("Internal consistency error: {0}")]
    Internal(String),
}

impl PodForgeError {
    /// Returns true if the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PodForgeError::InvalidRequest(_))
    }
}

/// Result type alias for PodForge operations
pub type Result<T> = std::result::Result<T, PodForgeError>;
