//! Error types shared across layers.
//!
//! - [`StorageError`] is the typed contract of the URL store.
//! - [`AppError`] is what services and handlers return; it renders as the
//!   JSON error envelope `{"error": {"code", "message", "details"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Errors surfaced by URL store implementations.
///
/// `AliasExists` and `NotFound` are distinct from infrastructure failures so
/// callers can branch on them (regenerate an alias, answer 404, ...).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The alias is already taken. Retryable with a fresh alias.
    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    /// No record has this alias.
    #[error("alias '{alias}' not found")]
    NotFound { alias: String },

    /// The backing storage failed (I/O, connection, pool timeout).
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

impl StorageError {
    pub fn alias_exists(alias: impl Into<String>) -> Self {
        Self::AliasExists {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    /// Returns true for errors that a new alias may resolve.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error returned by services and HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Splits the error into its status code and serializable payload.
    pub fn to_error_info(&self) -> (StatusCode, ErrorInfo) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorInfo {
                code,
                message: message.clone(),
                details: details.clone(),
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_error_info();
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AliasExists { alias } => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            StorageError::NotFound { alias } => {
                AppError::not_found("URL not found", json!({ "alias": alias }))
            }
            StorageError::Unavailable(_) => AppError::internal("Storage unavailable", json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let reason = errors
                    .first()
                    .and_then(|err| err.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is not valid".to_string());
                format!("field {field}: {reason}")
            })
            .collect();

        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}
