use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PayloadError;

/// Primary key attribute of every stored record.
pub const RECORD_ID_FIELD: &str = "recordId";

/// First of the two attributes the update route can change.
pub const ATTRIBUTE1_FIELD: &str = "attribute1";

/// Second of the two attributes the update route can change.
pub const ATTRIBUTE2_FIELD: &str = "attribute2";

/// A health record: a schemaless JSON document keyed by `recordId`.
///
/// Apart from the key, every field is opaque payload and is passed through
/// to the store unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthRecord(Map<String, Value>);

impl HealthRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses a request body into a record.
    ///
    /// The body must be a JSON object. No other validation is applied, so a
    /// record without `recordId` parses fine and is rejected later by the store.
    pub fn from_json_str(body: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(PayloadError::NotAnObject),
        }
    }

    /// Returns the record key when it is present and a string.
    pub fn record_id(&self) -> Option<&str> {
        self.0.get(RECORD_ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for HealthRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_str_object() {
        let record =
            HealthRecord::from_json_str(r#"{"recordId":"r1","bloodType":"O+","visits":3}"#)
                .unwrap();

        assert_eq!(record.record_id(), Some("r1"));
        assert_eq!(record.get("bloodType"), Some(&json!("O+")));
        assert_eq!(record.get("visits"), Some(&json!(3)));
    }

    #[test]
    fn test_from_json_str_without_record_id() {
        let record = HealthRecord::from_json_str(r#"{"attribute1":"a"}"#).unwrap();
        assert_eq!(record.record_id(), None);
    }

    #[test]
    fn test_from_json_str_rejects_non_object() {
        assert_eq!(
            HealthRecord::from_json_str("[1, 2, 3]"),
            Err(PayloadError::NotAnObject)
        );
        assert_eq!(
            HealthRecord::from_json_str(r#""recordId""#),
            Err(PayloadError::NotAnObject)
        );
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let result = HealthRecord::from_json_str(r#"{"recordId": "#);
        assert!(matches!(result, Err(PayloadError::InvalidJson(_))));
    }

    #[test]
    fn test_numeric_record_id_is_not_a_key() {
        let record = HealthRecord::from_json_str(r#"{"recordId": 42}"#).unwrap();
        assert_eq!(record.record_id(), None);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut record = HealthRecord::new();
        record.insert(RECORD_ID_FIELD, json!("r1"));
        record.insert("nested", json!({"a": [1, 2]}));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"recordId": "r1", "nested": {"a": [1, 2]}}));
    }
}
