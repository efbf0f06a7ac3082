//! CLI administration tool for url-shortener.
//!
//! Works directly against the SQLite store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- save https://example.com/a
//!
//! # Save a URL under a custom alias
//! cargo run --bin admin -- save https://example.com/a --alias my-link
//!
//! # Look up an alias
//! cargo run --bin admin -- get my-link
//!
//! # Delete an alias
//! cargo run --bin admin -- delete my-link
//!
//! # Create the schema / check the database
//! cargo run --bin admin -- db init
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_PATH` is required, `ALIAS_LENGTH` and
//! `ALIAS_MAX_ATTEMPTS` shape generated aliases.

use url_shortener::application::services::UrlService;
use url_shortener::config::{self, Config};
use url_shortener::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use url::Url;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Save a URL
    Save {
        /// URL to shorten
        url: String,

        /// Custom alias (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the schema if it does not exist
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let store = Arc::new(
        SqliteUrlRepository::open(&config.storage_path, &config.sqlite_settings())
            .await
            .context("Failed to open storage")?,
    );

    let result = match cli.command {
        Commands::Save { url, alias } => save(&config, store.clone(), url, alias).await,
        Commands::Get { alias } => get(&config, store.clone(), alias).await,
        Commands::Delete { alias, yes } => delete(&config, store.clone(), alias, yes).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.close().await;
    result
}

fn url_service(config: &Config, store: Arc<SqliteUrlRepository>) -> Result<UrlService> {
    Ok(UrlService::new(
        store,
        Arc::new(config.alias_generator()?),
        config.alias_max_attempts,
    ))
}

/// Saves a URL and prints the alias it was stored under.
async fn save(
    config: &Config,
    store: Arc<SqliteUrlRepository>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    Url::parse(&url).with_context(|| format!("'{url}' is not a valid URL"))?;

    let saved = url_service(config, store)?
        .save_url(&url, alias.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save URL: {}", e))?;

    println!("{}", "✅ URL saved".green().bold());
    println!("  Alias: {}", saved.alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!("  ID:    {}", saved.id.to_string().bright_black());

    Ok(())
}

/// Prints the URL stored under an alias.
async fn get(config: &Config, store: Arc<SqliteUrlRepository>, alias: String) -> Result<()> {
    let url = url_service(config, store)?
        .resolve(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("{url}");
    Ok(())
}

/// Deletes an alias after confirmation.
///
/// Confirmation defaults to No; `--yes` skips it.
async fn delete(
    config: &Config,
    store: Arc<SqliteUrlRepository>,
    alias: String,
    skip_confirm: bool,
) -> Result<()> {
    let service = url_service(config, store)?;

    let url = service
        .resolve(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("  Alias: {}", alias.cyan());
    println!("  URL:   {}", url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_url(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete alias: {}", e))?;

    println!("{}", "✅ Alias deleted".green().bold());
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, store: &SqliteUrlRepository) -> Result<()> {
    match action {
        DbAction::Init => {
            store
                .init_schema()
                .await
                .context("Failed to create schema")?;
            println!("{}", "✅ Schema ready".green().bold());
        }
        DbAction::Check => {
            store.ping().await.context("Database is not reachable")?;
            let count = store.count().await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Records: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}
