//! In-memory storage backend.
//!
//! Stores products in a `HashMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
