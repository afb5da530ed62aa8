use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Error for a record written without a usable key.
    pub fn missing_record_id() -> Self {
        Self::InvalidData("record is missing string key attribute 'recordId'".to_string())
    }
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
