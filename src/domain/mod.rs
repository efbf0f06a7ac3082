//! Domain layer containing the URL record and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Capability traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a particular database.
//! Implementations of the store live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
