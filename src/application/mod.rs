//! Application layer services implementing business logic.
//!
//! Services consume the store and generator traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias allocation, lookup and deletion

pub mod services;
