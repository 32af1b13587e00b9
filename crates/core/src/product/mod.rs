mod error;
mod http_mapping;
mod types;
mod validation;

pub use error::ProductError;
pub use http_mapping::{product_error_body, product_error_to_status_code, NOT_FOUND_MESSAGE};
pub use types::{new_product_id, Product, ProductDraft};
pub use validation::{parse_and_validate, validate_product, FieldError};
