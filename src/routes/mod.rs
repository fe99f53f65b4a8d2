//! HTTP route handlers.
//!
//! Two fixed routes, both returning JSON. Anything else falls through to axum's
//! default 404/405 handling. Request tracing is enabled via middleware that
//! generates a unique request ID for each incoming request.

pub mod health;
pub mod root;

use axum::{middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;

/// Creates the Axum router with both routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/healthz", get(health::health))
        // Live process data, never cacheable
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
