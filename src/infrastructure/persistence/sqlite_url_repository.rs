//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{UrlDeleter, UrlReader, UrlSaver};
use crate::error::StorageError;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL
    )
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// Connection settings for [`SqliteUrlRepository::open`].
#[derive(Debug, Clone)]
pub struct SqliteSettings {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// SQLite repository for alias to URL mappings.
///
/// Every operation is a single statement. Alias uniqueness is enforced by the
/// `UNIQUE` constraint, so concurrent inserts of the same alias cannot both
/// succeed.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository over an existing pool.
    ///
    /// The schema is not touched; call [`Self::init_schema`] before use.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file and ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the file cannot be opened or
    /// the schema cannot be created.
    pub async fn open(
        path: impl AsRef<Path>,
        settings: &SqliteSettings,
    ) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(settings.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.init_schema().await?;

        Ok(repository)
    }

    /// Creates the `url` table and its alias index if they do not exist.
    ///
    /// Safe to run on every start: existing rows are never touched.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE)
            .execute(self.pool.as_ref())
            .await?;
        sqlx::query(CREATE_ALIAS_INDEX)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!("URL schema ready");
        Ok(())
    }

    /// Checks that a connection can be acquired and used.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    /// Counts stored records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(target_url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::alias_exists(alias)),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UrlReader for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| StorageError::not_found(alias))
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let done = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if done.rows_affected() == 0 {
            return Err(StorageError::not_found(alias));
        }

        Ok(())
    }
}
