//! Core error types.
//!
//! The taxonomy is flat and deliberately small: `InvalidUrl`, `Decoding`,
//! `StatusCode`, `Other`. Nothing in this crate retries or recovers; every
//! failure is surfaced to the caller as one of these four kinds.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type FetchResult<T> = Result<T, FetchError>;

/// The four error kinds a request can fail with.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base URL string could not be parsed, or the URL plus query
    /// parameters could not be assembled into a valid URL. Raised before any
    /// network I/O; the parse cause is discarded.
    #[error("invalid URL")]
    InvalidUrl,

    /// Serializing the request body or decoding the response payload failed.
    #[error("JSON decoding failed: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The response status code was outside 200-299.
    ///
    /// Deliberately opaque: the actual status code and response body are
    /// discarded at classification time, so callers cannot distinguish a 404
    /// from a 500 through this error alone.
    #[error("unacceptable status code")]
    StatusCode,

    /// Any otherwise-unclassified failure, including transport-level errors,
    /// carrying the original cause.
    #[error("request failed: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Wrap an arbitrary cause as [`FetchError::Other`].
    pub fn other(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(cause.into())
    }

    /// Normalize an arbitrary failure into this taxonomy.
    ///
    /// Idempotent: a cause that is already a `FetchError` passes through
    /// unchanged rather than being double-wrapped; anything else becomes
    /// [`FetchError::Other`].
    pub fn classify(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        match cause.into().downcast::<FetchError>() {
            Ok(already) => *already,
            Err(other) => Self::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::InvalidUrl.to_string(), "invalid URL");
        assert_eq!(
            FetchError::StatusCode.to_string(),
            "unacceptable status code"
        );
        assert!(
            FetchError::Decoding(decode_error())
                .to_string()
                .starts_with("JSON decoding failed")
        );
    }

    #[test]
    fn test_other_carries_source() {
        let err = FetchError::other("connection reset");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decoding_carries_source() {
        let err = FetchError::Decoding(decode_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_classify_is_idempotent_for_all_kinds() {
        assert!(matches!(
            FetchError::classify(FetchError::InvalidUrl),
            FetchError::InvalidUrl
        ));
        assert!(matches!(
            FetchError::classify(FetchError::StatusCode),
            FetchError::StatusCode
        ));
        assert!(matches!(
            FetchError::classify(FetchError::Decoding(decode_error())),
            FetchError::Decoding(_)
        ));
        let passed = FetchError::classify(FetchError::other("boom"));
        match passed {
            // No nested FetchError: the original Other comes back as-is.
            FetchError::Other(cause) => assert!(cause.downcast::<FetchError>().is_err()),
            other => panic!("expected Other, got: {other:?}"),
        }
    }

    #[test]
    fn test_classify_wraps_foreign_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(FetchError::classify(io), FetchError::Other(_)));
    }
}
