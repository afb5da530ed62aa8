//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! JSON records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use health_records_core::record::{HealthRecord, RECORD_ID_FIELD};
use health_records_core::storage::{RepositoryError, Result};
use serde_json::{Map, Number, Value};

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// Key attribute for a record ID.
pub fn record_key(record_id: &str) -> (&'static str, AttributeValue) {
    (RECORD_ID_FIELD, AttributeValue::S(record_id.to_string()))
}

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &HealthRecord) -> Result<Item> {
    if record.record_id().is_none() {
        return Err(RepositoryError::missing_record_id());
    }

    Ok(record
        .as_map()
        .iter()
        .map(|(field, value)| (field.clone(), value_to_attribute(value)))
        .collect())
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &Item) -> Result<HealthRecord> {
    item.iter()
        .map(|(field, attr)| Ok((field.clone(), attribute_to_value(attr)?)))
        .collect::<Result<Map<String, Value>>>()
        .map(HealthRecord::from)
}

/// Convert a JSON value to an attribute value.
///
/// Numbers are stored as their decimal text, as DynamoDB requires.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert an attribute value to a JSON value.
///
/// String and number sets come back as arrays. Binary attributes are rejected.
pub fn attribute_to_value(attr: &AttributeValue) -> Result<Value> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), attribute_to_value(v)?)))
            .collect::<Result<Map<String, Value>>>()
            .map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

/// Parse DynamoDB number text, preferring integers over floats.
fn parse_number(text: &str) -> Result<Number> {
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Ok(Number::from(u));
    }

    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid number attribute: {text}")))
}
