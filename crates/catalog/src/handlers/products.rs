//! Product CRUD handlers.
//!
//! Each axum handler is a thin wrapper over an `*_impl` function that works on
//! the store gateway and returns a `ProductError` on failure. The `ApiError`
//! boundary turns that error into the HTTP response.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use catalog_core::product::{new_product_id, parse_and_validate, Product, ProductError};
use catalog_core::storage::ProductStore;

use crate::{handlers::ApiError, state::AppState};

// ============================================================================
// Create Product
// ============================================================================

/// Create a new product (POST /product).
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = create_product_impl(&state.products, &body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn create_product_impl(store: &ProductStore, body: &[u8]) -> Result<Product, ProductError> {
    let draft = parse_and_validate(body)?;
    let product = draft.into_product(new_product_id());

    store.put(&product).await?;

    tracing::info!(product_id = %product.product_id, name = %product.name, "Created product");

    Ok(product)
}

// ============================================================================
// Get Product
// ============================================================================

/// Get a single product by ID (GET /product/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = get_product_impl(&state.products, &id).await?;
    Ok(Json(product))
}

/// GET /product/ with an empty ID segment: always not found.
pub async fn get_product_without_id(
    State(state): State<AppState>,
) -> Result<Json<Product>, ApiError> {
    let product = get_product_impl(&state.products, "").await?;
    Ok(Json(product))
}

async fn get_product_impl(store: &ProductStore, id: &str) -> Result<Product, ProductError> {
    Ok(store.get(id).await?)
}

// ============================================================================
// Update Product
// ============================================================================

/// Replace a product by ID (PUT /product/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = update_product_impl(&state.products, &id, &body).await?;
    Ok(Json(product))
}

/// PUT /product/ with an empty ID segment: always not found, body unread.
pub async fn update_product_without_id(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = update_product_impl(&state.products, "", &body).await?;
    Ok(Json(product))
}

/// The existence check and the write are separate store calls, so a concurrent
/// delete between them is overwritten by this put.
async fn update_product_impl(
    store: &ProductStore,
    id: &str,
    body: &[u8],
) -> Result<Product, ProductError> {
    store.get(id).await?;

    let draft = parse_and_validate(body)?;
    let product = draft.into_product(id);

    store.put(&product).await?;

    tracing::info!(product_id = %id, "Updated product");

    Ok(product)
}

// ============================================================================
// Delete Product
// ============================================================================

/// Delete a product by ID (DELETE /product/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    delete_product_impl(&state.products, &id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

/// DELETE /product/ with an empty ID segment: always not found.
pub async fn delete_product_without_id(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    delete_product_impl(&state.products, "").await?;
    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

async fn delete_product_impl(store: &ProductStore, id: &str) -> Result<(), ProductError> {
    store.get(id).await?;
    store.delete(id).await?;

    tracing::info!(product_id = %id, "Deleted product");

    Ok(())
}

// ============================================================================
// List Products
// ============================================================================

/// List all products (GET /product).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = list_products_impl(&state.products).await?;
    Ok(Json(products))
}

async fn list_products_impl(store: &ProductStore) -> Result<Vec<Product>, ProductError> {
    let products = store.scan_all().await?;

    tracing::debug!(count = products.len(), "Listed products");

    Ok(products)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;

    use serde_json::json;

    fn store() -> ProductStore {
        AppState::in_memory().products
    }

    fn pen_body() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5,
            "available": true
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_server_id() {
        let store = store();
        let body = serde_json::to_vec(&json!({
            "productID": "client-chosen",
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5,
            "available": true
        }))
        .unwrap();

        let product = create_product_impl(&store, &body).await.unwrap();

        assert!(!product.product_id.is_empty());
        assert_ne!(product.product_id, "client-chosen");
        assert_eq!(store.get(&product.product_id).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_create_invalid_payload_writes_nothing() {
        let store = store();

        let result = create_product_impl(&store, br#"{"name":"Pen"}"#).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
        assert!(store.scan_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_empty_id_is_not_found() {
        let result = get_product_impl(&store(), "").await;
        assert_eq!(
            result,
            Err(ProductError::NotFound { id: String::new() })
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_writes_nothing() {
        let store = store();

        let result = update_product_impl(&store, "missing", &pen_body()).await;

        assert!(matches!(result, Err(ProductError::NotFound { .. })));
        assert!(store.get("missing").await.is_err());
        assert!(store.scan_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_parsing() {
        let result = update_product_impl(&store(), "missing", b"not json").await;
        assert!(matches!(result, Err(ProductError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_forces_path_id() {
        let store = store();
        let created = create_product_impl(&store, &pen_body()).await.unwrap();

        let body = serde_json::to_vec(&json!({
            "productID": "someone-else",
            "name": "Pen",
            "description": "Black ink",
            "price": 2,
            "available": false
        }))
        .unwrap();
        let updated = update_product_impl(&store, &created.product_id, &body)
            .await
            .unwrap();

        assert_eq!(updated.product_id, created.product_id);
        assert_eq!(updated.description, "Black ink");
        assert_eq!(updated.price, serde_json::Number::from(2));
        assert!(!updated.available);
        assert!(store.get("someone-else").await.is_err());
    }

    #[tokio::test]
    async fn test_update_invalid_payload_keeps_record() {
        let store = store();
        let created = create_product_impl(&store, &pen_body()).await.unwrap();

        let result = update_product_impl(&store, &created.product_id, br#"{"price":"free"}"#).await;

        assert!(matches!(result, Err(ProductError::Validation(errors)) if errors.len() == 4));
        assert_eq!(store.get(&created.product_id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let result = delete_product_impl(&store(), "missing").await;
        assert!(matches!(result, Err(ProductError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = store();
        let created = create_product_impl(&store, &pen_body()).await.unwrap();

        delete_product_impl(&store, &created.product_id).await.unwrap();

        assert!(matches!(
            get_product_impl(&store, &created.product_id).await,
            Err(ProductError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_returns_all_created() {
        let store = store();
        assert!(list_products_impl(&store).await.unwrap().is_empty());

        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(create_product_impl(&store, &pen_body()).await.unwrap().product_id);
        }

        let mut listed: Vec<String> = list_products_impl(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_id)
            .collect();
        listed.sort();
        ids.sort();
        assert_eq!(listed, ids);
    }
}
