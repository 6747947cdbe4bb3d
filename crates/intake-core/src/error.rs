//! Error types module
//!
//! All intake failures are unified under [`IntakeError`]. The HTTP client works with
//! `anyhow` internally and raises [`IntakeError::Http`] for non-success statuses, so
//! callers can recover the typed error with `IntakeError::from(anyhow::Error)`.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Remote service answered but refused the request
    Warn,
    /// Unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result alias used across intake crates
pub type IntakeResult<T> = Result<T, IntakeError>;

impl IntakeError {
    /// Whether retrying the same call could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            IntakeError::Http { status, .. } => *status >= 500 || *status == 429,
            IntakeError::Request(_) => true,
            _ => false,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            IntakeError::Http { status, .. } if *status < 500 => LogLevel::Warn,
            IntakeError::Config(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Emit this error through `tracing` at its own level.
    pub fn log(&self, context: &str) {
        match self.log_level() {
            LogLevel::Warn => tracing::warn!(error = %self, "{}", context),
            LogLevel::Error => tracing::error!(error = ?self, "{}", context),
        }
    }
}

impl From<anyhow::Error> for IntakeError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<IntakeError>() {
            Ok(intake) => return intake,
            Err(err) => err,
        };
        let err = match err.downcast::<io::Error>() {
            Ok(io_err) => return IntakeError::Io(io_err),
            Err(err) => err,
        };
        IntakeError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Decode(err.to_string())
    }
}
