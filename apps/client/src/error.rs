//! Client error types.

use quiz_core::QuizError;
use thiserror::Error;

/// Errors surfaced to the user from the quiz client.
///
/// The `Display` output is the message shown on screen; callers do not retry.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
