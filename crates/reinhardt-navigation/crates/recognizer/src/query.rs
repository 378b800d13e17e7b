//! Query string handling.

use std::collections::HashMap;

/// Splits a URL at its first `?` into path and optional query string.
pub fn split_query(url: &str) -> (&str, Option<&str>) {
	match url.split_once('?') {
		Some((path, query)) => (path, Some(query)),
		None => (url, None),
	}
}

/// Parses an `application/x-www-form-urlencoded` query string.
///
/// Keys without a value map to an empty string. When a key repeats, the
/// last value wins. A malformed query yields an empty map.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
	serde_urlencoded::from_str::<Vec<(String, String)>>(query)
		.map(|pairs| pairs.into_iter().collect())
		.unwrap_or_default()
}
