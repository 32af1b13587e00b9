//! Pure functions for mapping product errors to HTTP responses.
//!
//! The HTTP shell calls these to build the status code and JSON body for a
//! failed operation; nothing here touches the network.

use serde_json::{json, Value};

use crate::storage::RepositoryError;

use super::ProductError;

/// Body message for unknown, absent or empty product identifiers.
pub const NOT_FOUND_MESSAGE: &str = "Item not found or id is not valid";

/// Maps a [`ProductError`] to an HTTP status code.
///
/// - `MalformedInput` -> 400 (Bad Request)
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Storage(ConnectionFailed)` -> 503 (Service Unavailable)
/// - any other `Storage` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use catalog_core::product::{product_error_to_status_code, ProductError};
///
/// let error = ProductError::NotFound { id: "abc".to_string() };
/// assert_eq!(product_error_to_status_code(&error), 404);
/// ```
pub fn product_error_to_status_code(error: &ProductError) -> u16 {
    match error {
        ProductError::MalformedInput(_) | ProductError::Validation(_) => 400,
        ProductError::NotFound { .. } => 404,
        ProductError::Storage(RepositoryError::ConnectionFailed(_)) => 503,
        ProductError::Storage(_) => 500,
    }
}

/// Builds the JSON body returned for a [`ProductError`].
///
/// Validation failures list every field message under `errors`; all other
/// errors carry a single `error` string. Storage details are not exposed.
pub fn product_error_body(error: &ProductError) -> Value {
    match error {
        ProductError::MalformedInput(message) => json!({ "error": message }),
        ProductError::Validation(errors) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            json!({ "errors": messages })
        }
        ProductError::NotFound { .. } => json!({ "error": NOT_FOUND_MESSAGE }),
        ProductError::Storage(_) => json!({ "error": "Internal server error" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::FieldError;

    #[test]
    fn test_malformed_input_maps_to_400() {
        let error = ProductError::MalformedInput("Invalid JSON: EOF".to_string());

        assert_eq!(product_error_to_status_code(&error), 400);
        assert_eq!(
            product_error_body(&error),
            json!({ "error": "Invalid JSON: EOF" })
        );
    }

    #[test]
    fn test_validation_maps_to_400_with_all_messages() {
        let error = ProductError::Validation(vec![
            FieldError {
                field: "name",
                message: "name is a required field".to_string(),
            },
            FieldError {
                field: "price",
                message: "price is a required field".to_string(),
            },
        ]);

        assert_eq!(product_error_to_status_code(&error), 400);
        assert_eq!(
            product_error_body(&error),
            json!({ "errors": ["name is a required field", "price is a required field"] })
        );
    }

    #[test]
    fn test_not_found_maps_to_404_with_fixed_body() {
        let error = ProductError::NotFound {
            id: "missing".to_string(),
        };

        assert_eq!(product_error_to_status_code(&error), 404);
        assert_eq!(
            product_error_body(&error),
            json!({ "error": "Item not found or id is not valid" })
        );
    }

    #[test]
    fn test_connection_failure_maps_to_503() {
        let error = ProductError::Storage(RepositoryError::ConnectionFailed(
            "no route to host".to_string(),
        ));
        assert_eq!(product_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_storage_failure_is_opaque() {
        let error = ProductError::Storage(RepositoryError::QueryFailed(
            "Throughput exceeded, please retry".to_string(),
        ));

        assert_eq!(product_error_to_status_code(&error), 500);
        assert_eq!(
            product_error_body(&error),
            json!({ "error": "Internal server error" })
        );
    }
}
