use thiserror::Error;

/// Errors that can occur when reading a request body into a record or patch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body could not be read: {0}")]
    Unreadable(String),
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required attribute: {0}")]
    MissingAttribute(&'static str),
}
