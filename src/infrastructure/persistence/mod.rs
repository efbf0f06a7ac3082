//! URL store implementations.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Durable storage in a single SQLite table
//! - [`InMemoryUrlRepository`] - Process-local storage for tests and ephemeral runs

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::{SqliteSettings, SqliteUrlRepository};
