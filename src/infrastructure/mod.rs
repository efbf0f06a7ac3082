//! Infrastructure layer for external integrations.
//!
//! This layer implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite and in-memory URL stores

pub mod persistence;
