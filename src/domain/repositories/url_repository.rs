//! Capability traits for URL persistence.

use crate::error::StorageError;
use async_trait::async_trait;

/// Persists new alias to URL mappings.
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a new record and returns its store-assigned id.
    ///
    /// The uniqueness check and the insert are one atomic operation in the
    /// backing storage. No retry happens here.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already taken.
    /// Returns [`StorageError::Unavailable`] on storage failures.
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Looks up target URLs by alias.
#[async_trait]
pub trait UrlReader: Send + Sync {
    /// Returns the URL exactly as it was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has this alias.
    /// Returns [`StorageError::Unavailable`] on storage failures.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes records by alias.
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Permanently removes the record with this alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing was deleted.
    /// Returns [`StorageError::Unavailable`] on storage failures.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// A complete URL store.
pub trait UrlStore: UrlSaver + UrlReader + UrlDeleter {}

impl<T: UrlSaver + UrlReader + UrlDeleter + ?Sized> UrlStore for T {}

#[cfg(test)]
mockall::mock! {
    /// Mock implementing every store capability.
    pub UrlStore {}

    #[async_trait]
    impl UrlSaver for UrlStore {
        async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;
    }

    #[async_trait]
    impl UrlReader for UrlStore {
        async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
    }

    #[async_trait]
    impl UrlDeleter for UrlStore {
        async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
    }
}
