use thiserror::Error;

use crate::config::ConfigError;

/// Defines errors that can occur while triggering the drive-index endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriggerError {
    /// A required environment value is missing. Raised before the HTTP
    /// client is constructed, so no request is ever sent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 401, 500)
        status_code: u16,
        /// Response body text, read best effort
        message: String,
    },
}

impl TriggerError {
    /// Process exit code for this error: 2 for configuration problems,
    /// 1 for anything that went wrong on the wire.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            TriggerError::Config(_) => 2,
            TriggerError::Http(_) | TriggerError::Api { .. } => 1,
        }
    }
}
