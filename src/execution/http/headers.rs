//! HTTP header construction.
//!
//! Builds a `HeaderMap` from the caller's string pairs. Names and values that
//! are not representable on the wire propagate as errors (classified `Other`
//! by the taxonomy) rather than being silently dropped.

use crate::error::FetchResult;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Build a `HeaderMap` from caller-supplied string pairs.
///
/// Insertion is last-write-wins on duplicate names, matching the mapping
/// semantics of the input.
pub fn build_header_map(custom: Option<&HashMap<String, String>>) -> FetchResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(custom) = custom {
        for (name, value) in custom {
            let header_name = HeaderName::from_bytes(name.as_bytes())?;
            let header_value = HeaderValue::from_str(value)?;
            headers.insert(header_name, header_value);
        }
    }
    Ok(headers)
}

/// Ensure a JSON content type, keeping any explicit caller-supplied value.
pub fn ensure_json_content_type(headers: &mut HeaderMap) {
    headers
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_none_yields_empty_map() {
        let headers = build_header_map(None).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_pairs_are_applied() {
        let custom = HashMap::from([
            ("x-request-source".to_string(), "test".to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ]);
        let headers = build_header_map(Some(&custom)).unwrap();

        assert_eq!(headers.get("x-request-source").unwrap(), "test");
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_case_insensitive_duplicates_collapse() {
        // HeaderMap lowercases names, so mixed-case duplicates end up as one
        // entry rather than two.
        let custom = HashMap::from([
            ("X-Tag".to_string(), "a".to_string()),
            ("x-tag".to_string(), "b".to_string()),
        ]);
        let headers = build_header_map(Some(&custom)).unwrap();
        assert_eq!(headers.get_all("x-tag").iter().count(), 1);
    }

    #[test]
    fn test_invalid_name_propagates_as_other() {
        let custom = HashMap::from([("bad name".to_string(), "value".to_string())]);
        let result = build_header_map(Some(&custom));
        assert!(matches!(result, Err(FetchError::Other(_))));
    }

    #[test]
    fn test_invalid_value_propagates_as_other() {
        let custom = HashMap::from([("x-tag".to_string(), "bad\nvalue".to_string())]);
        let result = build_header_map(Some(&custom));
        assert!(matches!(result, Err(FetchError::Other(_))));
    }

    #[test]
    fn test_json_content_type_is_ensured_not_forced() {
        let mut headers = HeaderMap::new();
        ensure_json_content_type(&mut headers);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        ensure_json_content_type(&mut headers);
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }
}
