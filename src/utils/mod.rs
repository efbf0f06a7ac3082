//! Utility functions for alias generation and validation.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation

pub mod alias_generator;
