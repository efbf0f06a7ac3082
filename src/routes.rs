//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`        - Health check (storage lookup)
//! - `POST   /url`           - Save a URL
//! - `DELETE /url/{alias}`   - Delete an alias
//! - `GET    /{alias}`       - Redirect to the stored URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Request id** - `x-request-id` propagation
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(tracing::layer())
        .layer(middleware::from_fn(request_id::layer));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
