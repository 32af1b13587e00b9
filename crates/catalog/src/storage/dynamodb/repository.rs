//! DynamoDB repository implementation.
//!
//! Implements `ProductRepository` from `catalog_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use catalog_core::product::Product;
use catalog_core::storage::{ProductRepository, Result};

use crate::config::Config;

use super::conversions::{item_to_product, product_key, product_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. When `dynamodb_endpoint` is
    /// set the client talks to that endpoint instead (e.g. DynamoDB Local).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.table_name,
            endpoint = config.dynamodb_endpoint.as_deref().unwrap_or("aws"),
            "Using DynamoDB storage"
        );

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_product(&self, product: &Product) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(product)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_products(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A single Scan returns at most 1 MB; follow LastEvaluatedKey to the end.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                products.push(item_to_product(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            count = products.len(),
            "Scanned products"
        );

        Ok(products)
    }
}
