//! Type Conversions for FetchError
//!
//! This module contains From trait implementations for converting
//! common error types into FetchError.

use super::types::FetchError;

// From implementations
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(err)
    }
}

// The taxonomy gives `InvalidUrl` no cause payload; the parse error is
// dropped here.
impl From<url::ParseError> for FetchError {
    fn from(_: url::ParseError) -> Self {
        Self::InvalidUrl
    }
}

impl From<reqwest::header::InvalidHeaderName> for FetchError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for FetchError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::Other(Box::new(err))
    }
}
