//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// URL management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Save a URL under a custom or generated alias
/// - `DELETE /url/{alias}`  - Delete an alias
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
