use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{PayloadError, RECORD_ID_FIELD};

/// Inbound request descriptor handed over by the transport layer.
///
/// Only these three fields are read. `pathParameters` may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Verb and path template, e.g. `GET /health-records/{recordId}`.
    pub route_key: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    /// JSON-encoded body.
    #[serde(default)]
    pub body: Option<String>,
    /// Set by the transport when the raw body could not be turned into text.
    #[serde(skip)]
    pub body_error: Option<PayloadError>,
}

impl RouteRequest {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            ..Self::default()
        }
    }

    /// Sets the `recordId` path parameter.
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(RECORD_ID_FIELD.to_string(), record_id.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Marks the body as unreadable. Routes that need a body fail with this error.
    pub fn with_unreadable_body(mut self, message: impl Into<String>) -> Self {
        self.body = None;
        self.body_error = Some(PayloadError::Unreadable(message.into()));
        self
    }

    /// The body text, or why there is none.
    pub fn body(&self) -> Result<&str, PayloadError> {
        if let Some(error) = &self.body_error {
            return Err(error.clone());
        }
        self.body.as_deref().ok_or(PayloadError::MissingBody)
    }

    /// The `recordId` path parameter, treating an empty value as absent.
    pub fn record_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(RECORD_ID_FIELD))
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}
