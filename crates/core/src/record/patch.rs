use serde_json::Value;

use super::{HealthRecord, PayloadError, ATTRIBUTE1_FIELD, ATTRIBUTE2_FIELD};

/// The partial update applied by the update route.
///
/// Only `attribute1` and `attribute2` can be changed through this path. Every
/// other field in the request body is ignored and every other field on the
/// stored record is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributePatch {
    pub attribute1: Value,
    pub attribute2: Value,
}

impl AttributePatch {
    pub fn new(attribute1: Value, attribute2: Value) -> Self {
        Self {
            attribute1,
            attribute2,
        }
    }

    /// Parses a request body and extracts both attributes.
    ///
    /// Both keys must be present. A `null` value counts as present.
    pub fn from_json_str(body: &str) -> Result<Self, PayloadError> {
        let mut record = HealthRecord::from_json_str(body)?.into_inner();

        let attribute1 = record
            .remove(ATTRIBUTE1_FIELD)
            .ok_or(PayloadError::MissingAttribute(ATTRIBUTE1_FIELD))?;
        let attribute2 = record
            .remove(ATTRIBUTE2_FIELD)
            .ok_or(PayloadError::MissingAttribute(ATTRIBUTE2_FIELD))?;

        Ok(Self::new(attribute1, attribute2))
    }

    /// The `(field, value)` pairs written by this patch, in a fixed order.
    pub fn fields(&self) -> [(&'static str, &Value); 2] {
        [
            (ATTRIBUTE1_FIELD, &self.attribute1),
            (ATTRIBUTE2_FIELD, &self.attribute2),
        ]
    }

    pub fn apply_to(&self, record: &mut HealthRecord) {
        for (field, value) in self.fields() {
            record.insert(field, value.clone());
        }
    }
}
