//! typefetch
//!
//! A typed HTTP request executor: build a request from a URL, optional query
//! parameters, headers, and a JSON body; send it through an injectable
//! transport; and get back either a value decoded into a caller-chosen type
//! or an error classified into a small, flat taxonomy.
//!
//! # Example
//!
//! ```rust,ignore
//! use typefetch::prelude::*;
//!
//! #[derive(serde::Deserialize)]
//! struct ShipList {
//!     ships: Vec<String>,
//! }
//!
//! let executor = RequestExecutor::new()?;
//! let spec = RequestSpec::get("https://api.example.com/ships").query("page", "1");
//! let list: ShipList = executor.execute(spec).await?;
//! ```
#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod execution;
pub mod observability;
pub mod types;

pub use error::{FetchError, FetchResult};
pub use execution::executor::RequestExecutor;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::error::{FetchError, FetchResult};
    pub use crate::execution::executor::RequestExecutor;
    pub use crate::execution::http::transport::{
        HttpTransport, ReqwestTransport, TransportRequest, TransportResponse,
    };
    pub use crate::observability::tracing::TracingConfig;
    pub use crate::types::http::{HttpConfig, HttpConfigBuilder};
    pub use crate::types::request::{LoggingMode, Method, RequestSpec};
}
