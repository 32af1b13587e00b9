use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::product::{product_error_body, product_error_to_status_code, ProductError};

/// Failure boundary shared by every product handler.
///
/// Client errors become their mapped 4xx response. Storage failures are
/// logged and answered with an opaque 5xx body.
#[derive(Debug)]
pub struct ApiError(pub ProductError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = product_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Storage error");
        } else {
            tracing::warn!(status = %status, error = %self.0, "API error");
        }

        (status, Json(product_error_body(&self.0))).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        Self(err)
    }
}
