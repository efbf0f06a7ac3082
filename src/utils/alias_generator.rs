//! Short alias generation and validation utilities.
//!
//! Generated aliases are drawn uniformly from [`ALPHABET`] using the
//! thread-local generator from `rand`, which is a CSPRNG seeded from the OS.
//! Uniqueness is not guaranteed here; the store rejects duplicates on insert.

use std::num::NonZeroUsize;

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Characters a generated alias is made of.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

const DEFAULT_LENGTH: NonZeroUsize = NonZeroUsize::new(DEFAULT_ALIAS_LENGTH).unwrap();

/// Upper bound for both generated and custom aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Alias looked up by the storage health check.
pub const HEALTH_CHECK_ALIAS: &str = "__health_check__";

/// Aliases that would shadow service routes or the health check.
pub const RESERVED_ALIASES: &[&str] = &["url", "health", HEALTH_CHECK_ALIAS];

/// Produces candidate aliases.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a fresh candidate alias.
    fn generate(&self) -> String;
}

/// Generates fixed-length random aliases from [`ALPHABET`].
#[derive(Debug, Clone, Copy)]
pub struct RandomAliasGenerator {
    length: NonZeroUsize,
}

impl RandomAliasGenerator {
    pub fn new(length: NonZeroUsize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length.get()
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length.get())
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `alias` collides with a service route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved alias
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if is_reserved(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
