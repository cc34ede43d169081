//! Error types for the MXY application runtime
//!
//! Every failure during startup surfaces as a [`RuntimeError`] and is returned
//! to the entry point unchanged.

use thiserror::Error;

/// Runtime error types
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Malformed command-line argument
    #[error("Invalid argument syntax: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// HTTP listener could not be bound
    #[error("Failed to bind {address}: {source}")]
    BindError {
        /// Address the listener tried to bind
        address: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Internal runtime error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl From<tokio::task::JoinError> for RuntimeError {
    fn from(err: tokio::task::JoinError) -> Self {
        RuntimeError::InternalError(format!("Server task failed: {}", err))
    }
}

impl RuntimeError {
    /// Check if the error was caused by the command line
    pub fn is_argument_error(&self) -> bool {
        matches!(self, RuntimeError::InvalidArgument(_))
    }

    /// Check if the error was caused by configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, RuntimeError::ConfigError(_) | RuntimeError::LoggingError(_))
    }
}
