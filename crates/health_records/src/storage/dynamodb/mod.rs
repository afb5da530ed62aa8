//! DynamoDB storage backend implementation.
//!
//! One table, partition key `recordId` (string), no sort key. Items are
//! schemaless and map one-to-one onto [`HealthRecord`] fields.
//!
//! [`HealthRecord`]: health_records_core::record::HealthRecord

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
