//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to save a URL under a short alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to shorten.
    #[validate(url(message = "is not a valid URL"))]
    pub url: String,

    /// Optional custom alias. Missing or empty means "generate one".
    ///
    /// Length, characters and reserved names are checked by
    /// [`crate::utils::alias_generator::validate_custom_alias`].
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response returned after a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
    pub url: String,
}
