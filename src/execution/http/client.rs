//! HTTP client builder utilities
//!
//! This module provides unified HTTP client construction logic so that every
//! transport instance is configured the same way.

use crate::error::{FetchError, FetchResult};
use crate::types::http::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// # Arguments
/// * `config` - HTTP configuration containing timeout, proxy, headers, etc.
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(FetchError)` - Configuration or build error
pub fn build_http_client_from_config(config: &HttpConfig) -> FetchResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    // Apply timeout settings
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    // Apply proxy settings
    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| FetchError::other(format!("invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    // Apply user agent
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    // Apply default headers
    if !config.headers.is_empty() {
        let headers = crate::execution::http::headers::build_header_map(Some(&config.headers))?;
        builder = builder.default_headers(headers);
    }

    // Build the client
    builder
        .build()
        .map_err(|e| FetchError::other(format!("failed to create HTTP client: {e}")))
}
