//! Free-form records as stored in the document store
//!
//! A record is a JSON object. Field order is preserved as delivered by the
//! backend, which is what gives skill categories their display order.

use crate::error::StoreError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One document: field name → JSON value
pub type Record = serde_json::Map<String, Value>;

/// Require a decoded payload to be an object
///
/// # Errors
/// - `StoreError::Decode` if the value is not a JSON object
pub fn into_record(value: Value, location: &str) -> Result<Record, StoreError> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(StoreError::decode(
            location,
            format!("expected an object, found {}", kind(&other)),
        )),
    }
}

/// Render a scalar as text (strings as-is, numbers and booleans formatted)
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field decoders that accept whatever an editor left in the store
///
/// Nulls and wrong-typed scalars decode as blank instead of failing the whole
/// section.
pub(crate) mod lenient {
    use super::{scalar_to_string, Deserialize, Deserializer, Value};

    pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_to_string(&value).unwrap_or_default())
    }

    pub(crate) fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(collect_strings(value))
    }

    pub(crate) fn optional_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => None,
            other => Some(collect_strings(other)),
        })
    }

    fn collect_strings(value: Value) -> Vec<String> {
        match value {
            Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
            Value::Null => Vec::new(),
            other => scalar_to_string(&other).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn into_record_accepts_objects() {
        let record = into_record(json!({"title": "About"}), "content/about").unwrap();
        assert_eq!(record["title"], "About");
    }

    #[test]
    fn into_record_rejects_arrays() {
        let err = into_record(json!(["a"]), "content/about").unwrap_err();
        assert!(err.to_string().contains("expected an object, found array"));
    }

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(scalar_to_string(&json!("x")), Some("x".to_string()));
        assert_eq!(scalar_to_string(&json!(4)), Some("4".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!({"a": 1})), None);
    }

    #[test]
    fn record_preserves_field_order() {
        let record: Record =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
