//! Public data types: request inputs and HTTP client configuration.

pub mod http;
pub mod request;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use request::{LoggingMode, Method, RequestSpec};
