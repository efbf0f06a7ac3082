//! Handler for the save endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;
use crate::state::AppState;

/// Saves a URL under a custom or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "alias": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "alias": "ab12cd", "url": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the custom alias is taken.
/// Returns 500 Internal Server Error on storage failures.
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let request_id = request_id.map(|Extension(id)| id.0).unwrap_or_default();

    if let Err(e) = payload.validate() {
        tracing::info!(request_id = %request_id, error = %e, "invalid save request");
        return Err(e.into());
    }

    let saved = state
        .url_service
        .save_url(&payload.url, payload.alias.as_deref())
        .await?;

    tracing::info!(
        request_id = %request_id,
        id = saved.id,
        alias = %saved.alias,
        "save request handled"
    );

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            id: saved.id,
            alias: saved.alias,
            url: payload.url,
        }),
    ))
}
