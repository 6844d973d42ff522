//! URL and query-string resolution.
//!
//! The resolved URL is the pre-flight gate of the pipeline: an unparsable
//! base string fails here with `InvalidUrl`, before the transport is reached.

use crate::error::FetchResult;
use std::collections::HashMap;
use url::Url;

/// Parse a base URL string and append the supplied query parameters.
///
/// All supplied pairs are applied, percent-encoded, in no guaranteed order.
/// Query parameters already present on the base string are preserved.
pub fn resolve_url(base: &str, query: Option<&HashMap<String, String>>) -> FetchResult<Url> {
    let mut url = Url::parse(base)?;
    if let Some(params) = query
        && !params.is_empty()
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}
