use thiserror::Error;

use crate::storage::RepositoryError;

use super::validation::FieldError;

/// Errors a product operation can end with.
///
/// `MalformedInput`, `Validation` and `NotFound` are client errors that the
/// handler boundary turns into responses. `Storage` is an infrastructure
/// failure that is never recovered locally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),
    #[error("Product not found: {id}")]
    NotFound { id: String },
    #[error("Storage failure: {0}")]
    Storage(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { id, .. } => ProductError::NotFound { id },
            other => ProductError::Storage(other),
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
