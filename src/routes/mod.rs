//! HTTP route handlers.
//!
//! Both endpoints live under `/api` and carry per-route Cache-Control headers:
//! the health probe is never cached, the build descriptor may be cached briefly.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod info;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_INFO};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    // Build info - constant until the next deploy
    let info_routes = Router::new().route("/info", get(info::info)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INFO),
        ),
    );

    let api_routes = Router::new().merge(health_routes).merge(info_routes);

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
