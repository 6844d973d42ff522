//! HTTP plumbing: URL resolution, header construction, client building, and
//! the transport seam.

pub mod client;
pub mod headers;
pub mod transport;
pub mod url;
