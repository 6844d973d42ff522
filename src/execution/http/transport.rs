//! HTTP transport abstraction.
//!
//! The executor hands a fully formed request to an injectable transport and
//! gets back a status code plus raw body bytes, or a transport-level failure.
//! The transport owns connection reuse, TLS, and timeout enforcement; tests
//! can substitute a synthetic implementation without going through `reqwest`.

use crate::defaults;
use crate::error::FetchResult;
use crate::execution::http::client::build_http_client_from_config;
use crate::types::http::HttpConfig;
use crate::types::request::Method;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use url::Url;
use uuid::Uuid;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Per-call correlation id, also attached to the summary log line.
    pub request_id: Uuid,
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized JSON body, if the call supplied one.
    pub body: Option<Vec<u8>>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The network collaborator.
///
/// Implementations return already-classified `FetchError` values; the
/// executor forwards them unchanged. No retry or backoff happens at this
/// seam.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> FetchResult<TransportResponse>;
}

/// The bundled `reqwest`-backed transport.
///
/// Response caching is bypassed entirely: the transport keeps no cache of its
/// own and stamps `cache-control: no-cache` onto every outgoing request after
/// caller headers are applied, so the directive cannot be overridden per
/// call.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with default `HttpConfig`.
    pub fn new() -> FetchResult<Self> {
        Self::from_config(&HttpConfig::default())
    }

    /// Transport with explicit client configuration.
    pub fn from_config(config: &HttpConfig) -> FetchResult<Self> {
        Ok(Self {
            client: build_http_client_from_config(config)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> FetchResult<TransportResponse> {
        let mut headers = request.headers;
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static(defaults::http::CACHE_CONTROL),
        );

        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
