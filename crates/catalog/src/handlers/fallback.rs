use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Fallback for routes that do not exist.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
