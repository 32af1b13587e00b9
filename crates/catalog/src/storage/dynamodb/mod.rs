//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ProductRepository`
//! using `aws-sdk-dynamodb`. Products live in a single table whose partition
//! key is the `productID` string attribute.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
