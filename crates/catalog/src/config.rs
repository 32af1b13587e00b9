use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the products (default: "ProductsTable")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: unset)
    #[allow(dead_code)]
    pub dynamodb_endpoint: Option<String>,
    /// AWS region (default: "us-east-1")
    #[allow(dead_code)]
    pub region: String,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCTS_TABLE` - DynamoDB table name (default: "ProductsTable")
    /// - `DYNAMODB_ENDPOINT` - DynamoDB endpoint override (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("PRODUCTS_TABLE").unwrap_or_else(|_| "ProductsTable".to_string()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok().filter(|v| !v.is_empty()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
