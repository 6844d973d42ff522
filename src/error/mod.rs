//! Error handling types for typefetch.
//!
//! Every failure in this crate is classified into exactly one of the four
//! kinds of [`FetchError`]. This module is intentionally dependency-light.

mod conversions;
pub mod types;

pub use types::*;
