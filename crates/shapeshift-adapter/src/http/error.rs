/*
[INPUT]:  Error sources (local validation, HTTP, serialization)
[OUTPUT]: Structured error types for the whole crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the ShapeShift adapter
#[derive(Error, Debug)]
pub enum ShapeshiftError {
    /// A locally-checked argument constraint was violated; raised before
    /// any network call is attempted
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// HTTP request failed (connection failure, timeout, or a body that
    /// did not parse as JSON)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Form payload construction failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ShapeshiftError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ShapeshiftError::InvalidArgument {
            message: message.into(),
        }
    }

    /// True when the error was raised locally, before any I/O happened.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ShapeshiftError::InvalidArgument { .. }
                | ShapeshiftError::Serialization(_)
                | ShapeshiftError::UrlParse(_)
        )
    }
}

/// Result type alias for ShapeShift operations
pub type Result<T> = std::result::Result<T, ShapeshiftError>;
