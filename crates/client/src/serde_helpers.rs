//! Lenient deserializers for catalog items.
//!
//! Items only promise their identifying key (`path` for assets, `name` for
//! components). Every other modeled field is decoded with one of these
//! helpers so a `null` or oddly typed value degrades to "absent" instead of
//! failing the whole page.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Strings as is, numbers and booleans as their JSON text, anything else as `None`.
pub(crate) fn opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// `T::default()` for `null` or any value that does not decode as `T`.
pub(crate) fn default_on_invalid<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A list that keeps the elements decoding as `T` and drops the rest.
/// `null` or a non-array value is an empty list.
pub(crate) fn vec_skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(elements) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let total = elements.len();
    let kept: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();
    if kept.len() < total {
        tracing::debug!(dropped = total - kept.len(), "Skipped malformed nested items");
    }
    Ok(kept)
}
