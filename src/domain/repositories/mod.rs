//! Store capability traits for the domain layer.
//!
//! Each trait is a minimal method set so consumers depend only on what they
//! call. [`UrlStore`] bundles all three and is implemented automatically for
//! any type that implements them.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite, used in production
//! - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local, used in tests
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlReader, UrlSaver, UrlStore};

#[cfg(test)]
pub use url_repository::MockUrlStore;
