//! Error types for twelvebar.

use thiserror::Error;

/// Result type alias for twelvebar operations.
pub type Result<T> = std::result::Result<T, TwelvebarError>;

/// Errors that can occur while serving a `get_ohlc` request.
///
/// None of these are retried. Each one fails the whole request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwelvebarError {
    /// Required configuration (the provider credential) is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a business-level error.
    #[error("Upstream error: {message}")]
    Upstream {
        /// Provider status code, when reported.
        code: Option<u16>,
        /// Provider message.
        message: String,
    },

    /// The provider could not be reached or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A raw record lacks a required field or carries an unreadable value.
    #[error("Malformed bar at index {index}: {reason}")]
    MalformedData {
        /// Position of the record in the provider response.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl TwelvebarError {
    /// Returns a short, stable name for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Upstream { .. } => "upstream",
            Self::Transport(_) => "transport",
            Self::MalformedData { .. } => "malformed_data",
        }
    }
}
