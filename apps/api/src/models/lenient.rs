//! Forgiving field decoders for model-generated resume JSON.
//!
//! The generation endpoint feeds us whatever the LLM produced after JSON repair, so
//! every field decodes to its empty value instead of failing: absent or `null` → empty,
//! wrong container shape → empty, scalar where a string is expected → stringified.
//! Use with `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through; numbers and booleans are stringified; anything else is `None`.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_string).unwrap_or_default())
}

/// A list of strings. Non-array values decode to `[]`; array elements that are not
/// scalars (objects, nested arrays, null) are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    })
}

/// A list of records. Elements that are not JSON objects are dropped.
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A single nested record; anything but an object yields `T::default()`.
pub fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(item @ Value::Object(_)) => serde_json::from_value(item).unwrap_or_default(),
        _ => T::default(),
    })
}

/// An optional record that is silently discarded when malformed.
pub fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|item| serde_json::from_value(item).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_string_scalars() {
        assert_eq!(coerce_string(&json!("x")), Some("x".to_string()));
        assert_eq!(coerce_string(&json!(2020)), Some("2020".to_string()));
        assert_eq!(coerce_string(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_string(&json!(null)), None);
        assert_eq!(coerce_string(&json!({"a": 1})), None);
        assert_eq!(coerce_string(&json!(["a"])), None);
    }
}
