use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        fallback::not_found,
        health::livez,
        products::{
            create_product, delete_product, delete_product_without_id, get_product,
            get_product_without_id, list_products, update_product, update_product_without_id,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let product_routes = Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/",
            get(get_product_without_id)
                .put(update_product_without_id)
                .delete(delete_product_without_id),
        )
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(product_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
