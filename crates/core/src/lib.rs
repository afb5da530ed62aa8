//! Functional core for the health records service.
//!
//! - [`record`]: the schemaless health record document and the two-field update patch
//! - [`storage`]: the record store contract and its error type
//! - [`dispatch`]: the route table and the dispatcher that maps requests to store calls

pub mod dispatch;
pub mod record;
pub mod storage;
