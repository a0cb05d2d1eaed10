//! Failure modes of a single data-fetch step.
//!
//! The scanner treats every variant as "no usable value" for the ticker at
//! hand. The variants exist so each failure path can be logged and, when
//! diagnostics are enabled, reported on its own.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FetchError {
    /// The broker returned no matching record.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The broker answered with an unexpected HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// A required field was missing or had the wrong shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("insufficient data: expected {expected} points, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("series length mismatch: target {target}, benchmark {benchmark}")]
    LengthMismatch { target: usize, benchmark: usize },

    /// The inputs were present but yield no meaningful statistic.
    #[error("degenerate input: {0}")]
    Degenerate(String),
}

impl FetchError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn malformed(what: impl Into<String>) -> Self {
        Self::Malformed(what.into())
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::Status(503).to_string(), "unexpected status 503");
        assert!(FetchError::not_found("TSLA").to_string().contains("TSLA"));
        let err = FetchError::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_serializes_as_tagged_variant() {
        let json = serde_json::to_value(FetchError::Status(500)).unwrap();
        assert_eq!(json, serde_json::json!({ "Status": 500 }));
    }
}
