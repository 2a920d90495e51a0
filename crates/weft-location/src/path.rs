#![forbid(unsafe_code)]

//! Path dictionary codec.
//!
//! The hash path is a flat list of `key=value` entries joined by `&`, with
//! an optional leading `/`. Values are stored here exactly as they appear
//! in the path; percent-encoding and -decoding is the sync layer's job
//! (see [`crate::sync`]).

use std::collections::HashMap;

/// Decode a hash path into its key/value dictionary.
///
/// Strips one leading `/` if present. An empty remainder yields an empty
/// dictionary. Entries are split on the first `=`; a segment with no `=`
/// at all maps the whole segment to an empty-string value, which every
/// reader treats as absent. Nothing is validated and nothing fails.
///
/// Duplicate keys keep the last occurrence.
#[must_use]
pub fn deserialize_pathname(pathname: &str) -> HashMap<String, String> {
    let normalized = pathname.strip_prefix('/').unwrap_or(pathname);
    if normalized.is_empty() {
        return HashMap::new();
    }
    normalized
        .split('&')
        .map(|entry| {
            let mut parts = entry.split('=');
            let key = parts.next().unwrap_or_default().to_owned();
            let value = parts.next().unwrap_or_default().to_owned();
            (key, value)
        })
        .collect()
}

/// Encode a dictionary back into a hash path.
///
/// Emits one `key=value` string per entry, sorts those strings
/// lexicographically, and joins them with `&`. Note the sort is over the
/// full `key=value` text, not the key alone; with equal keys the order can
/// differ from a key-only sort. An empty dictionary serializes to the
/// empty string.
#[must_use]
pub fn serialize_pathname(dict: &HashMap<String, String>) -> String {
    let mut entries: Vec<String> = dict
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    entries.sort();
    entries.join("&")
}
