//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::product::Product;
use catalog_core::storage::{ProductRepository, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn put_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(product.product_id.clone(), product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(id);
        Ok(())
    }

    async fn scan_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let product = Product::new("Pen", "Blue ink", 2, true);

        repo.put_product(&product).await.unwrap();

        let retrieved = repo.get_product(&product.product_id).await.unwrap();
        assert_eq!(retrieved, Some(product));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_product("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = InMemoryRepository::new();
        let product = Product::new("Pen", "Blue ink", 2, true);
        repo.put_product(&product).await.unwrap();

        let mut updated = product.clone();
        updated.description = "Black ink".to_string();
        updated.available = false;
        repo.put_product(&updated).await.unwrap();

        let retrieved = repo.get_product(&product.product_id).await.unwrap();
        assert_eq!(retrieved, Some(updated));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let product = Product::new("Pen", "Blue ink", 2, true);
        repo.put_product(&product).await.unwrap();

        repo.delete_product(&product.product_id).await.unwrap();

        assert!(repo.get_product(&product.product_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_succeeds() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_product("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_scan_products() {
        let repo = InMemoryRepository::new();
        assert!(repo.scan_products().await.unwrap().is_empty());

        let pen = Product::new("Pen", "Blue ink", 2, true);
        let notebook = Product::new("Notebook", "A5 dotted", 4, false);
        repo.put_product(&pen).await.unwrap();
        repo.put_product(&notebook).await.unwrap();

        let products = repo.scan_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.contains(&pen));
        assert!(products.contains(&notebook));
    }
}
