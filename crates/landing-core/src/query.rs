//! Query String Encoding
//!
//! `application/x-www-form-urlencoded` in both directions via
//! `url::form_urlencoded`, the same algorithm the browser's
//! `URLSearchParams` runs.

use url::form_urlencoded;

/// Serialize `(key, value)` pairs, preserving order. No leading `?`.
pub fn encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Parse a query string (with or without leading `?`) into ordered pairs
///
/// Duplicate keys are all kept; a segment without `=` has an empty value.
/// Escapes that do not form valid UTF-8 decode to U+FFFD, as in the browser.
pub fn parse(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .into_owned()
        .collect()
}

/// Join a path and a query string into a history-safe relative URL
pub fn with_query(pathname: &str, query: &str) -> String {
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{query}")
    }
}
