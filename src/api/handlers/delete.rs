//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Permanently deletes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete_url(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
