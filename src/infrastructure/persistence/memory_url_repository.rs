//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{UrlDeleter, UrlReader, UrlSaver};
use crate::error::StorageError;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, UrlRecord>,
    last_id: i64,
}

/// Process-local URL store.
///
/// A single mutex guards the map and the id counter, so the uniqueness check
/// and the insert happen under one lock. The lock is never held across an
/// `.await`. Ids are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    inner: Mutex<Inner>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the record stored under `alias`.
    pub fn find(&self, alias: &str) -> Option<UrlRecord> {
        self.lock().records.get(alias).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UrlSaver for InMemoryUrlRepository {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let id = inner.last_id + 1;

        match inner.records.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StorageError::alias_exists(alias)),
            Entry::Vacant(slot) => {
                slot.insert(UrlRecord::new(id, alias, target_url));
                inner.last_id = id;
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlReader for InMemoryUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.lock()
            .records
            .get(alias)
            .map(|record| record.target_url.clone())
            .ok_or_else(|| StorageError::not_found(alias))
    }
}

#[async_trait]
impl UrlDeleter for InMemoryUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        self.lock()
            .records
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(alias))
    }
}
