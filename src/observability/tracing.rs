//! Tracing: the request summary line and opt-in subscriber configuration.
//!
//! The executor emits exactly one `info` line per successful call (in
//! `Normal` mode) through the `tracing` facade. Installing a subscriber is
//! entirely the host application's business; `TracingConfig` is a
//! convenience for applications that don't already have one.

use crate::error::{FetchError, FetchResult};
use crate::types::request::{LoggingMode, Method};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;
use uuid::Uuid;

/// Emits the one-line request summary, gated by the request's logging mode.
pub struct RequestTracer {
    mode: LoggingMode,
}

impl RequestTracer {
    pub fn new(mode: LoggingMode) -> Self {
        Self { mode }
    }

    /// Trace a completed request: method, resolved URL, and status code,
    /// plus the correlation id. Emits nothing in `Silent` mode.
    pub fn trace_request_complete(&self, request_id: Uuid, method: Method, url: &Url, status: u16) {
        if self.mode == LoggingMode::Silent {
            return;
        }
        info!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status_code = status,
            "Request completed"
        );
    }
}

/// Output format for the optional subscriber installed by [`TracingConfig::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
    Json,
}

/// Opt-in `tracing-subscriber` setup.
///
/// Purely a convenience for host applications; the executor only ever emits
/// through the `tracing` macros and works with any subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub enabled: bool,
    /// Env-filter directive string, e.g. `"typefetch=debug"`.
    pub filter: String,
    pub format: OutputFormat,
}

impl TracingConfig {
    /// Verbose human-readable output for local development.
    pub fn development() -> Self {
        Self {
            enabled: true,
            filter: "debug".to_string(),
            format: OutputFormat::Pretty,
        }
    }

    /// Info-level compact output.
    pub fn minimal() -> Self {
        Self {
            enabled: true,
            filter: "info".to_string(),
            format: OutputFormat::Compact,
        }
    }

    /// JSON lines for production log pipelines.
    pub fn json_production() -> Self {
        Self {
            enabled: true,
            filter: "info".to_string(),
            format: OutputFormat::Json,
        }
    }

    /// No subscriber installed at all.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            filter: "off".to_string(),
            format: OutputFormat::Compact,
        }
    }

    /// Override the filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Install a global subscriber for this configuration.
    ///
    /// Fails if a global subscriber is already installed; the cause is
    /// classified `Other`.
    pub fn init(&self) -> FetchResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let filter = EnvFilter::try_new(&self.filter)
            .map_err(|e| FetchError::other(format!("invalid tracing filter: {e}")))?;
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = match self.format {
            OutputFormat::Pretty => builder.pretty().try_init(),
            OutputFormat::Compact => builder.compact().try_init(),
            OutputFormat::Json => builder.json().try_init(),
        };
        result.map_err(|e| FetchError::other(format!("failed to install subscriber: {e}")))
    }
}
