//! Tolerant decoding of flexible list fields.
//!
//! The camp API stores `additional_links` and `attachments` as JSON columns and
//! depending on the endpoint returns them either as a native array or as a
//! JSON-encoded string. Both shapes are normalized here, at the deserialization
//! boundary, into `Option<Vec<T>>` so nothing downstream sees the wire union.
//!
//! Normalization never fails: anything that is not an array (directly or after
//! decoding a string) becomes `None`. Nullable scalar columns go through
//! [`null_as_default`].

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Normalizes a raw flexible value into an array of JSON values.
///
/// - an array is returned as-is
/// - a non-empty string is decoded as JSON and kept only if it is an array
/// - null, an empty string, undecodable text or any other shape yields `None`
///
/// # Examples
///
/// ```rust
/// use campdesk::libs::flexible::normalize_flexible_field;
/// use serde_json::json;
///
/// assert!(normalize_flexible_field(&json!("[1, 2]")).is_some());
/// assert!(normalize_flexible_field(&json!("not json")).is_none());
/// assert!(normalize_flexible_field(&json!(null)).is_none());
/// ```
pub fn normalize_flexible_field(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items.clone()),
        Value::String(text) if !text.trim().is_empty() => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Normalizes a flexible value into a typed list.
///
/// Elements that do not match `T` are skipped rather than failing the
/// whole list.
pub fn normalize_typed<T: DeserializeOwned>(value: &Value) -> Option<Vec<T>> {
    normalize_flexible_field(value).map(|items| items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect())
}

/// Serde adapter for `#[serde(deserialize_with = "...")]` on flexible fields.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(normalize_typed))
}

/// Serde adapter mapping an explicit `null` to the type's default.
///
/// `#[serde(default)]` only covers missing keys; nullable database columns
/// come back as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
