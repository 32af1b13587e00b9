//! Application state with repository-based storage.
//!
//! The state is built once at startup and cloned into every request handler.
//! It holds the store gateway, whose backend is chosen by feature flag.

use std::sync::Arc;

use catalog_core::storage::ProductStore;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Store gateway over the configured backend.
    pub products: ProductStore,
}

impl AppState {
    /// Creates a new AppState around an existing gateway.
    pub fn new(products: ProductStore) -> Self {
        Self { products }
    }

    /// Creates an AppState backed by process-local storage.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        use crate::storage::inmemory::InMemoryRepository;

        Self::new(ProductStore::new(Arc::new(InMemoryRepository::new())))
    }

    /// Creates an AppState using the backend selected at compile time.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> Self {
        tracing::info!("Using in-memory storage");
        Self::in_memory()
    }

    /// Creates an AppState using the backend selected at compile time.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::dynamodb::DynamoDbRepository;

        let repo = DynamoDbRepository::from_config(config).await;
        Self::new(ProductStore::new(Arc::new(repo)))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
