//! Default Configuration Values
//!
//! This module centralizes all default values used throughout the crate.
//! Having defaults in one place makes them easier to maintain, document, and adjust.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// Set to 30 seconds to cover slow API endpoints plus network latency
    /// and proxy delays.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    ///
    /// Set to 10 seconds which is sufficient for most network conditions
    /// while not being too aggressive.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = "typefetch/0.1.0";

    /// Cache-control directive stamped on every outgoing request
    ///
    /// The bundled transport always prefers the fresh remote resource over
    /// cached data; this directive is applied after caller headers so it
    /// cannot be overridden per call.
    pub const CACHE_CONTROL: &str = "no-cache";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_defaults() {
        assert_eq!(http::REQUEST_TIMEOUT, Duration::from_secs(30));
        assert_eq!(http::CONNECT_TIMEOUT, Duration::from_secs(10));
        assert_eq!(http::USER_AGENT, "typefetch/0.1.0");
    }

    #[test]
    fn test_connect_timeout_below_request_timeout() {
        assert!(http::CONNECT_TIMEOUT < http::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_cache_control_directive() {
        assert_eq!(http::CACHE_CONTROL, "no-cache");
    }
}
