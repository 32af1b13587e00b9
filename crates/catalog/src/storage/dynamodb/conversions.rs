//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! products. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::product::Product;
use catalog_core::storage::RepositoryError;
use serde_json::Number;

/// Partition key attribute of the products table.
pub const PRODUCT_ID_ATTR: &str = "productID";

/// Build the key map addressing a single product.
pub fn product_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        PRODUCT_ID_ATTR.to_string(),
        AttributeValue::S(id.to_string()),
    )])
}

/// Convert a Product to DynamoDB item.
pub fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let mut item = product_key(&product.product_id);

    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(
        "price".to_string(),
        AttributeValue::N(product.price.to_string()),
    );
    item.insert(
        "available".to_string(),
        AttributeValue::Bool(product.available),
    );

    item
}

/// Convert a DynamoDB item to Product.
pub fn item_to_product(
    item: &HashMap<String, AttributeValue>,
) -> Result<Product, RepositoryError> {
    Ok(Product {
        product_id: get_string(item, PRODUCT_ID_ATTR)?,
        name: get_string(item, "name")?,
        description: get_string(item, "description")?,
        price: get_number(item, "price")?,
        available: get_bool(item, "available")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute.
fn get_number(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Number, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse::<Number>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
