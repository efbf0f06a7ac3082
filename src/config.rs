//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honored (loaded by `dotenvy` in the binaries).
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `prod`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `RUST_LOG` - Log filter (default: `debug` for local/dev, `info` for prod)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` for local, `json` otherwise)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6, range: 1-64)
//! - `ALIAS_MAX_ATTEMPTS` - Attempts on generated alias collisions (default: 5, range: 1-100)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - Seconds to wait on a locked database (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::infrastructure::persistence::SqliteSettings;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, MAX_ALIAS_LENGTH, RandomAliasGenerator};

/// Deployment environment. Selects logging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    /// Parses `APP_ENV`. Unknown values fall back to [`AppEnv::Prod`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" => Self::Dev,
            _ => Self::Prod,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }

    fn default_log_level(&self) -> &'static str {
        match self {
            Self::Local | Self::Dev => "debug",
            Self::Prod => "info",
        }
    }

    fn default_log_format(&self) -> &'static str {
        match self {
            Self::Local => "text",
            Self::Dev | Self::Prod => "json",
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated aliases.
    pub alias_length: usize,
    /// How many generated aliases are tried before a save fails.
    pub alias_max_attempts: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds a statement waits on a locked database (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORAGE_PATH` is missing.
    pub fn from_env() -> Result<Self> {
        let env = env::var("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Prod);

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| env.default_log_format().to_string());

        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let alias_max_attempts = parse_var("ALIAS_MAX_ATTEMPTS", 5)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_busy_timeout = parse_var("DB_BUSY_TIMEOUT", 5)?;

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            log_level,
            log_format,
            alias_length,
            alias_max_attempts,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `alias_length` or `alias_max_attempts` is out of range
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 100 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.alias_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Builds the alias generator described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `alias_length` is zero.
    pub fn alias_generator(&self) -> Result<RandomAliasGenerator> {
        let length =
            NonZeroUsize::new(self.alias_length).context("ALIAS_LENGTH must be at least 1")?;
        Ok(RandomAliasGenerator::new(length))
    }

    /// Returns the SQLite pool settings.
    pub fn sqlite_settings(&self) -> SqliteSettings {
        SqliteSettings {
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Aliases: length {}, max attempts {}",
            self.alias_length,
            self.alias_max_attempts
        );
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
