//! Product payload validation.
//!
//! The validator runs every field check in a fixed order and collects all
//! violations before reporting, so a caller sees every problem with a payload
//! in a single response.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::error::ProductError;
use super::types::ProductDraft;

/// A single validation failure for one field of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message, surfaced verbatim to the API caller.
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is a required field"),
        }
    }

    fn wrong_type(field: &'static str, expected: &str) -> Self {
        Self {
            field,
            message: format!("{field} must be a {expected}"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a parsed request body against the product schema.
///
/// Checks, in order: `name` and `description` are non-empty strings, `price` is
/// a number and `available` is a boolean. Values are passed through without
/// coercion, so `"1.5"` is not accepted as a price. Any `productID` in the
/// payload is ignored.
///
/// Unknown payload fields are dropped: only the four schema fields reach the draft.
///
/// # Examples
///
/// ```
/// use catalog_core::product::validate_product;
/// use serde_json::json;
///
/// let draft = validate_product(&json!({
///     "name": "Pen",
///     "description": "Blue ink",
///     "price": 1.5,
///     "available": true
/// }))
/// .unwrap();
/// assert_eq!(draft.name, "Pen");
///
/// let errors = validate_product(&json!({ "name": "Pen" })).unwrap_err();
/// assert_eq!(errors.len(), 3);
/// ```
pub fn validate_product(payload: &Value) -> Result<ProductDraft, Vec<FieldError>> {
    let Some(fields) = payload.as_object() else {
        return Err(vec![FieldError::wrong_type("body", "JSON object")]);
    };

    let mut errors = Vec::new();

    let name = record(required_string(fields, "name"), &mut errors);
    let description = record(required_string(fields, "description"), &mut errors);
    let price = record(required_number(fields, "price"), &mut errors);
    let available = record(required_bool(fields, "available"), &mut errors);

    match (name, description, price, available) {
        (Some(name), Some(description), Some(price), Some(available)) => Ok(ProductDraft {
            name,
            description,
            price,
            available,
        }),
        _ => Err(errors),
    }
}

/// Parses a raw request body and validates it.
///
/// An empty body is reported as malformed input, the same as any other body
/// that is not valid JSON.
pub fn parse_and_validate(body: &[u8]) -> Result<ProductDraft, ProductError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ProductError::MalformedInput(
            "Missing request body".to_string(),
        ));
    }

    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| ProductError::MalformedInput(format!("Invalid JSON: {e}")))?;

    validate_product(&payload).map_err(ProductError::Validation)
}

fn record<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Looks up a field, treating JSON `null` the same as an absent key.
fn present<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Option<&'a Value> {
    fields.get(field).filter(|v| !v.is_null())
}

fn required_string(fields: &Map<String, Value>, field: &'static str) -> Result<String, FieldError> {
    match present(fields, field) {
        None => Err(FieldError::required(field)),
        Some(Value::String(s)) if s.is_empty() => Err(FieldError::required(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::wrong_type(field, "string")),
    }
}

fn required_number(fields: &Map<String, Value>, field: &'static str) -> Result<Number, FieldError> {
    match present(fields, field) {
        None => Err(FieldError::required(field)),
        Some(Value::Number(n)) => Ok(n.clone()),
        Some(_) => Err(FieldError::wrong_type(field, "number")),
    }
}

fn required_bool(fields: &Map<String, Value>, field: &'static str) -> Result<bool, FieldError> {
    match present(fields, field) {
        None => Err(FieldError::required(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(FieldError::wrong_type(field, "boolean")),
    }
}
