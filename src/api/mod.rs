//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into [`crate::application::services::UrlService`]
//! calls and shapes their results into JSON responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request id and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
