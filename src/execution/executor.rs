//! The typed request executor.
//!
//! Pipeline per call: resolve URL -> build headers -> serialize body ->
//! transport -> status gate -> summary log -> decode. Every failure along
//! the way is one of the four `FetchError` kinds.

use crate::error::{FetchError, FetchResult};
use crate::execution::http::headers::{build_header_map, ensure_json_content_type};
use crate::execution::http::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::execution::http::url::resolve_url;
use crate::observability::tracing::RequestTracer;
use crate::types::http::HttpConfig;
use crate::types::request::RequestSpec;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

/// Executes `RequestSpec`s against an injectable transport and decodes
/// responses into caller-chosen types.
///
/// The executor holds no per-call state and takes `&self`, so concurrent
/// calls are independent with no ordering between them. Each call is a lazy
/// future resolving exactly once; dropping it abandons the in-flight call
/// without guaranteeing the remote operation is aborted.
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Executor backed by the bundled `reqwest` transport with default
    /// configuration.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Executor backed by the bundled transport with explicit configuration.
    pub fn with_config(config: &HttpConfig) -> FetchResult<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::from_config(
            config,
        )?)))
    }

    /// Executor backed by a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Execute one request and decode the response body as `T`.
    ///
    /// Resolves exactly once with either the decoded value or a classified
    /// error. A spec with an unparsable base URL never reaches the
    /// transport.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> FetchResult<T> {
        // 1. Resolve URL (pre-flight gate, before any network I/O)
        let url = resolve_url(&spec.url, spec.query.as_ref())?;

        // 2. Build headers
        let mut headers = build_header_map(spec.headers.as_ref())?;

        // 3. Serialize body
        let body = match &spec.body {
            Some(map) => {
                let bytes = serde_json::to_vec(map)?;
                ensure_json_content_type(&mut headers);
                Some(bytes)
            }
            None => None,
        };

        // 4. Transport
        let request_id = Uuid::new_v4();
        let response = self
            .transport
            .execute(TransportRequest {
                request_id,
                method: spec.method,
                url: url.clone(),
                headers,
                body,
            })
            .await?;

        // 5. Status gate: outside 200-299 fails opaquely, without decoding
        //    or logging
        if !(200..=299).contains(&response.status) {
            return Err(FetchError::StatusCode);
        }

        // 6. Summary log line
        RequestTracer::new(spec.logging).trace_request_complete(
            request_id,
            spec.method,
            &url,
            response.status,
        );

        // 7. Decode
        serde_json::from_slice(&response.body).map_err(FetchError::Decoding)
    }

    /// GET `url` and decode the response as `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: impl Into<String>) -> FetchResult<T> {
        self.execute(RequestSpec::get(url)).await
    }

    /// POST `body` to `url` and decode the response as `T`.
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        body: serde_json::Map<String, serde_json::Value>,
    ) -> FetchResult<T> {
        self.execute(RequestSpec::post(url).body(body)).await
    }

    /// PUT `body` to `url` and decode the response as `T`.
    pub async fn put<T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        body: serde_json::Map<String, serde_json::Value>,
    ) -> FetchResult<T> {
        self.execute(RequestSpec::put(url).body(body)).await
    }

    /// DELETE `url` and decode the response as `T`.
    pub async fn delete<T: DeserializeOwned>(&self, url: impl Into<String>) -> FetchResult<T> {
        self.execute(RequestSpec::delete(url)).await
    }
}
