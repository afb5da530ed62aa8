//! In-memory storage backend.
//!
//! Stores all records in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and local development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use health_records::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
