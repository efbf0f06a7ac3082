#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use url_shortener::application::services::UrlService;
use url_shortener::domain::repositories::UrlStore;
use url_shortener::infrastructure::persistence::{
    InMemoryUrlRepository, SqliteSettings, SqliteUrlRepository,
};
use url_shortener::state::AppState;
use url_shortener::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

/// A SQLite store backed by a file in a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct TestDb {
    pub dir: TempDir,
    pub repo: Arc<SqliteUrlRepository>,
}

impl TestDb {
    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("storage.db")
    }
}

pub async fn open_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteUrlRepository::open(dir.path().join("storage.db"), &SqliteSettings::default())
        .await
        .unwrap();

    TestDb {
        dir,
        repo: Arc::new(repo),
    }
}

/// Hands out aliases from a fixed list, then falls back to random ones.
pub struct ScriptedGenerator {
    aliases: std::sync::Mutex<Vec<String>>,
    fallback: RandomAliasGenerator,
}

impl ScriptedGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        Self {
            aliases: std::sync::Mutex::new(aliases.iter().rev().map(|a| a.to_string()).collect()),
            fallback: RandomAliasGenerator::default(),
        }
    }
}

impl AliasGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.aliases
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

pub fn create_service(store: Arc<dyn UrlStore>, generator: Arc<dyn AliasGenerator>) -> UrlService {
    UrlService::new(store, generator, UrlService::DEFAULT_MAX_ATTEMPTS)
}

pub fn create_test_state_with(store: Arc<dyn UrlStore>, aliases: &[&str]) -> AppState {
    let service = create_service(store, Arc::new(ScriptedGenerator::new(aliases)));
    AppState::new(Arc::new(service))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let store = Arc::new(InMemoryUrlRepository::new());
    let state = create_test_state_with(store.clone(), &[]);
    (state, store)
}
