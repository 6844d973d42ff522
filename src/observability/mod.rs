//! Observability: the per-request tracer and opt-in subscriber setup.

pub mod tracing;

pub use tracing::{OutputFormat, RequestTracer, TracingConfig};
