//! Error types for the Saxo OpenAPI integration.

use gammabot_core::FetchError;
use thiserror::Error;

/// Errors that can occur when talking to the Saxo gateway.
#[derive(Debug, Error)]
pub enum SaxoError {
    /// The gateway answered with a status the caller did not accept.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Response body, if any.
        message: String,
    },

    /// Connection or protocol failure.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Body did not match the expected shape.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The response carried no matching record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Client could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SaxoError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SaxoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SaxoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<SaxoError> for FetchError {
    fn from(err: SaxoError) -> Self {
        match err {
            SaxoError::Api { status_code, .. } => Self::Status(status_code),
            SaxoError::Network(msg) | SaxoError::Timeout(msg) | SaxoError::Configuration(msg) => {
                Self::Transport(msg)
            }
            SaxoError::Serialization(msg) => Self::Malformed(msg),
            SaxoError::NotFound(what) => Self::NotFound(what),
        }
    }
}

/// Result type alias for Saxo operations.
pub type Result<T> = std::result::Result<T, SaxoError>;
