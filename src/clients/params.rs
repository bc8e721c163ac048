//! Outgoing parameter sanitization and query encoding.
//!
//! Filter and field structs serialize `None` fields to JSON null; the
//! sanitizer strips those keys before transmission so absent arguments never
//! reach the wire, while falsy-but-meaningful values (`false`, `0`, `""`)
//! are preserved.

use serde_json::{Map, Value};

/// Removes every null-valued key from a parameter mapping.
///
/// Keys whose value is `false`, `0`, or an empty string are kept; only
/// `Value::Null` entries are dropped.
#[must_use]
pub fn strip_nulls(params: Map<String, Value>) -> Map<String, Value> {
    params
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect()
}

/// Encodes a sanitized parameter mapping as query string pairs.
///
/// Strings are used verbatim; numbers and booleans are rendered in their
/// canonical JSON form without surrounding quotes.
#[must_use]
pub fn to_query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
