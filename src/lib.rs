//! # URL Shortener
//!
//! Maps short aliases to long URLs. Clients save a URL and get an alias back,
//! lookups by alias redirect to the saved URL, and aliases can be deleted.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the store capability traits
//! - **Application Layer** ([`application`]) - Alias allocation and retry policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Alias allocation
//!
//! Aliases are either supplied by the caller or generated by
//! [`utils::alias_generator::RandomAliasGenerator`]. Uniqueness is enforced
//! only by the store's atomic insert; a collision on a generated alias is
//! retried with a fresh one a bounded number of times.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export APP_ENV="local"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{SavedUrl, UrlService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{UrlDeleter, UrlReader, UrlSaver, UrlStore};
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::{InMemoryUrlRepository, SqliteUrlRepository};
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
}
