//! CLI administration tool for url-shortener.
//!
//! Operates directly on the PostgreSQL link store, without going through the
//! HTTP API. The in-memory store is private to a running server and cannot be
//! inspected from here.
//!
//! # Usage
//!
//! ```bash
//! # List the most recent links
//! cargo run --bin admin -- links --limit 20
//!
//! # Show statistics for one link
//! cargo run --bin admin -- show q3Xk9_aZ
//!
//! # Create a link
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Check database connection, apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `BASE_URL` (optional): prefix used when printing short URLs

use url_shortener::application::services::LinkService;
use url_shortener::config::{self, mask_connection_string};
use url_shortener::infrastructure::persistence::PgLinkRepository;
use url_shortener::server::connect_pool;
use url_shortener::utils::base_url::build_short_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

type PgLinkService = LinkService<PgLinkRepository>;

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
    /// List the most recently created links
    Links {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show statistics for a short code
    Show {
        /// Short code to inspect
        code: String,
    },

    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,
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
    /// Check database connection and report link count
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_HOST/DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = connect_pool(&database_url, &config).await?;
    let pool = Arc::new(pool);
    let service = LinkService::new(Arc::new(PgLinkRepository::new(pool.clone())));

    match cli.command {
        Commands::Links { limit } => list_links(&service, limit).await?,
        Commands::Show { code } => show_link(&service, &code).await?,
        Commands::Shorten { url } => shorten(&service, config.base_url.as_deref(), url).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&service, &database_url).await?,
            DbAction::Migrate => migrate(&pool).await?,
        },
    }

    Ok(())
}

/// Prints a table of recent links, newest first.
async fn list_links(service: &PgLinkService, limit: i64) -> Result<()> {
    let links = service
        .list_links(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "No links yet".yellow());
        return Ok(());
    }

    println!(
        "{:<12} {:>8}  {:<19}  {}",
        "CODE".bold(),
        "CLICKS".bold(),
        "CREATED".bold(),
        "URL".bold()
    );

    for link in links {
        println!(
            "{:<12} {:>8}  {:<19}  {}",
            link.code.cyan(),
            link.clicks.to_string().bright_white(),
            link.created_at_formatted(),
            link.long_url
        );
    }

    Ok(())
}

/// Prints statistics for a single code.
async fn show_link(service: &PgLinkService, code: &str) -> Result<()> {
    let link = service
        .get_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "Link details:".bright_white().bold());
    println!("  Code:    {}", link.code.cyan());
    println!("  URL:     {}", link.long_url);
    println!("  Clicks:  {}", link.clicks.to_string().bright_yellow());
    println!("  Created: {}", link.created_at_formatted());

    Ok(())
}

/// Creates a link and prints its code, plus the short URL when `BASE_URL` is set.
async fn shorten(service: &PgLinkService, base_url: Option<&str>, url: String) -> Result<()> {
    let link = service
        .create_short_link(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!("  Code:      {}", link.code.cyan());

    match printable_short_url(base_url, &link.code) {
        Some(short_url) => println!("  Short URL: {}", short_url.bright_yellow()),
        None => println!("  {}", "Set BASE_URL to print the full short URL".yellow()),
    }

    Ok(())
}

/// Full short URL, only when a public base is configured.
fn printable_short_url(base_url: Option<&str>, code: &str) -> Option<String> {
    base_url.map(|base| build_short_url(base, code))
}

/// Applies the embedded migrations.
async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    println!("{}", "Migrations applied".green().bold());

    Ok(())
}

/// Verifies connectivity and reports the number of stored links.
async fn check_db(service: &PgLinkService, database_url: &str) -> Result<()> {
    println!(
        "Checking {}...",
        mask_connection_string(database_url).bright_white()
    );

    match service.health_check().await {
        Ok(()) => println!("{}", "Database connection OK".green().bold()),
        Err(e) => {
            println!("{} {}", "Database connection failed:".red().bold(), e);
            anyhow::bail!("database check failed");
        }
    }

    let count = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;
    println!("  Links stored: {}", count.to_string().bright_yellow());

    Ok(())
}
