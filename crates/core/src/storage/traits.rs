use async_trait::async_trait;

use crate::product::Product;

use super::Result;

/// Key-value backend for product records, keyed by `productID`.
///
/// Implementations hold no business rules: writes are unconditional and
/// deletes of absent keys succeed.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Inserts or replaces a product.
    async fn put_product(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its ID. Deleting an absent ID is not an error.
    async fn delete_product(&self, id: &str) -> Result<()>;

    /// Returns every stored product, in no particular order.
    async fn scan_products(&self) -> Result<Vec<Product>>;
}
