//! Store gateway: the single owner of persisted product state.

use std::sync::Arc;

use crate::product::Product;

use super::{ProductRepository, RepositoryError, Result};

const ENTITY_TYPE: &str = "Product";

/// Façade over a [`ProductRepository`] backend.
///
/// Constructed once at startup and shared by every handler. The gateway turns
/// "no such record" into [`RepositoryError::NotFound`], and treats an empty
/// identifier exactly like an unknown one.
#[derive(Clone)]
pub struct ProductStore {
    repo: Arc<dyn ProductRepository>,
}

impl ProductStore {
    /// Creates a gateway over the given backend.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Gets a product, failing with `NotFound` if the ID is empty or unknown.
    pub async fn get(&self, id: &str) -> Result<Product> {
        if id.is_empty() {
            return Err(not_found(id));
        }

        self.repo
            .get_product(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Inserts or replaces a product.
    pub async fn put(&self, product: &Product) -> Result<()> {
        self.repo.put_product(product).await
    }

    /// Removes a product. Absent IDs are ignored.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete_product(id).await
    }

    /// Returns every stored product.
    pub async fn scan_all(&self) -> Result<Vec<Product>> {
        self.repo.scan_products().await
    }
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY_TYPE,
        id: id.to_string(),
    }
}
