//! Request execution: the typed executor and its HTTP plumbing.

pub mod executor;
pub mod http;
