//! Serde helpers for loosely typed registry responses.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a JSON scalar as text.
///
/// Strings pass through, and numbers and booleans are rendered as text.
/// `null`, arrays, and objects read as absent.
pub fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
