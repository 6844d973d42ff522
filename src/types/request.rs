//! Request inputs: HTTP method, logging mode, and the per-call `RequestSpec`.

use std::collections::HashMap;

/// HTTP verb of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// The uppercase verb string, as it appears on the wire and in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Whether the executor emits its one-line summary after a successful
/// status-code check.
///
/// `Normal` emits through the `tracing` facade, so the host application's
/// subscriber configuration still decides what reaches an output. `Silent`
/// suppresses the line before it reaches any subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    Silent,
    #[default]
    Normal,
}

/// The transient inputs to one call. Built fresh per request and consumed by
/// the executor; not reused.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Base URL string. Parsed (and rejected as `InvalidUrl`) before any
    /// network I/O.
    pub url: String,
    /// HTTP verb.
    pub method: Method,
    /// Query parameters appended to the URL. Application order is
    /// insignificant; all supplied pairs are applied.
    pub query: Option<HashMap<String, String>>,
    /// Headers applied to the outgoing request, last-write-wins on
    /// duplicate names.
    pub headers: Option<HashMap<String, String>>,
    /// JSON object body. When present it is serialized to bytes and a
    /// `content-type: application/json` header is ensured.
    pub body: Option<serde_json::Map<String, serde_json::Value>>,
    /// Summary-line emission mode.
    pub logging: LoggingMode,
}

impl RequestSpec {
    /// Create a spec for the given method and base URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            query: None,
            headers: None,
            body: None,
            logging: LoggingMode::default(),
        }
    }

    /// GET request spec.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// POST request spec.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// PUT request spec.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// DELETE request spec.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Add a single query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add multiple query parameters.
    pub fn queries(mut self, params: HashMap<String, String>) -> Self {
        self.query.get_or_insert_with(HashMap::new).extend(params);
        self
    }

    /// Add a single header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add multiple headers.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .extend(headers);
        self
    }

    /// Set the whole JSON object body.
    pub fn body(mut self, body: serde_json::Map<String, serde_json::Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a single field to the JSON object body.
    pub fn body_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.body
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the logging mode.
    pub fn logging(mut self, mode: LoggingMode) -> Self {
        self.logging = mode;
        self
    }

    /// Shorthand for `logging(LoggingMode::Silent)`.
    pub fn silent(self) -> Self {
        self.logging(LoggingMode::Silent)
    }
}
