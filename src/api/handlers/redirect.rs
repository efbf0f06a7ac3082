//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL with 307 Temporary Redirect.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.url_service.resolve(&alias).await?;

    tracing::debug!(alias, target_url, "redirecting");

    Ok(Redirect::temporary(&target_url))
}
