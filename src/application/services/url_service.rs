//! Alias allocation, lookup and deletion service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::UrlStore;
use crate::error::{AppError, StorageError};
use crate::utils::alias_generator::{
    AliasGenerator, HEALTH_CHECK_ALIAS, is_reserved, validate_custom_alias,
};

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    pub id: i64,
    pub alias: String,
}

/// Service for saving, resolving and deleting short aliases.
///
/// Owns the caller-level allocation policy: a caller-supplied alias is used
/// as-is, otherwise aliases are generated and a collision on a generated
/// alias is retried with a fresh one, up to `max_attempts` times.
pub struct UrlService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn AliasGenerator>,
    max_attempts: usize,
}

impl UrlService {
    /// Attempts used when none is configured.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

    /// Creates a new URL service. `max_attempts` is clamped to at least 1.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn AliasGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Saves `target_url` under `alias`, or under a generated alias when
    /// `alias` is `None` or empty.
    ///
    /// The URL is stored unchanged; validating it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a custom alias is invalid.
    /// Returns [`AppError::Conflict`] if a custom alias is already taken.
    /// Returns [`AppError::Internal`] on storage failures or when every
    /// generated alias collided.
    pub async fn save_url(
        &self,
        target_url: &str,
        alias: Option<&str>,
    ) -> Result<SavedUrl, AppError> {
        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_custom_alias(alias)?;

                let id = self
                    .store
                    .save_url(target_url, alias)
                    .await
                    .map_err(|e| log_storage_error(e, alias))?;

                tracing::info!(id, alias, "url saved");
                Ok(SavedUrl {
                    id,
                    alias: alias.to_owned(),
                })
            }
            None => self.save_with_generated_alias(target_url).await,
        }
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.store
            .get_url(alias)
            .await
            .map_err(|e| log_storage_error(e, alias))
    }

    /// Deletes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        self.store
            .delete_url(alias)
            .await
            .map_err(|e| log_storage_error(e, alias))?;

        tracing::info!(alias, "url deleted");
        Ok(())
    }

    /// Checks that the store answers lookups.
    ///
    /// Looks up [`HEALTH_CHECK_ALIAS`], which is reserved and so never
    /// stored through the service. A "not found" answer counts as healthy.
    pub async fn health_check(&self) -> Result<(), AppError> {
        match self.store.get_url(HEALTH_CHECK_ALIAS).await {
            Ok(_) | Err(StorageError::NotFound { .. }) => Ok(()),
            Err(e) => Err(log_storage_error(e, HEALTH_CHECK_ALIAS)),
        }
    }

    async fn save_with_generated_alias(&self, target_url: &str) -> Result<SavedUrl, AppError> {
        for attempt in 1..=self.max_attempts {
            let alias = self.generator.generate();

            if is_reserved(&alias) {
                tracing::debug!(alias, attempt, "generated alias is reserved, regenerating");
                continue;
            }

            match self.store.save_url(target_url, &alias).await {
                Ok(id) => {
                    tracing::info!(id, alias, attempt, "url saved with generated alias");
                    return Ok(SavedUrl { id, alias });
                }
                Err(e) if e.is_retryable() => {
                    tracing::warn!(alias, attempt, "generated alias already exists, regenerating");
                }
                Err(e) => return Err(log_storage_error(e, &alias)),
            }
        }

        tracing::error!(attempts = self.max_attempts, "failed to generate a unique alias");
        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }
}

fn log_storage_error(e: StorageError, alias: &str) -> AppError {
    match &e {
        StorageError::Unavailable(source) => {
            tracing::error!(error = %source, alias, "storage unavailable");
        }
        other => tracing::debug!(error = %other, alias, "storage rejected request"),
    }
    e.into()
}
