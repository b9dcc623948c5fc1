//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The database could not be reached or rejected the login.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Schema creation or data insertion failed.
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 78,
            Self::Connection(_) => 69,
            Self::Operation(_) => 70,
        }
    }

    /// Returns a stable error code for log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Connection(_) => "CONNECTION_FAILURE",
            Self::Operation(_) => "OPERATION_FAILURE",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
