//! CLI administration tool for link-shortener.
//!
//! Inspects and manages links and performs database checks without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the first 20 links
//! cargo run --bin admin -- links list --limit 20
//!
//! # Show where a slug points
//! cargo run --bin admin -- links resolve b4zoo
//!
//! # Delete a link (also evicted from the cache)
//! cargo run --bin admin -- links delete b4zoo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`link_shortener::config`].

use link_shortener::config::{Config, load_from_env};
use link_shortener::domain::LinkError;
use link_shortener::server::{build_link_service, connect_cache, connect_database};
use link_shortener::state::AppLinkService;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links in insertion order
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        skip: i64,
    },

    /// Show the URL stored under a slug
    Resolve { slug: String },

    /// Delete a link
    Delete {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env()?;
    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
///
/// Goes through the same cache-aside repository as the server, so deletions
/// also evict the cached entry.
async fn handle_link_action(action: LinkAction, pool: PgPool, config: &Config) -> Result<()> {
    let cache = connect_cache(config).await;
    let service = build_link_service(pool, cache, config);

    match action {
        LinkAction::List { limit, skip } => list_links(&service, limit, skip).await?,
        LinkAction::Resolve { slug } => resolve_link(&service, &slug).await?,
        LinkAction::Delete { slug, yes } => delete_link(&service, &slug, yes).await?,
    }

    Ok(())
}

/// Prints a page of links.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Slug    URL                                        Created
///   ───────────────────────────────────────────────────────────────────────
///   b4zoo   https://www.google.com                     2024-01-15 10:30
/// ```
async fn list_links(service: &AppLinkService, limit: i64, skip: i64) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    if limit <= 0 || skip < 0 {
        anyhow::bail!("limit must be positive and skip must not be negative");
    }

    let links = service
        .list(limit, skip)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<50} {:<20}",
        "Slug".bright_white().bold(),
        "URL".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<50} {}",
            link.slug.cyan(),
            link.url,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn resolve_link(service: &AppLinkService, slug: &str) -> Result<()> {
    match service.resolve(slug).await {
        Ok(url) => println!("  {} → {}", slug.cyan(), url.bright_white()),
        Err(LinkError::NotFound) => println!("{}", format!("  No link under '{}'", slug).yellow()),
        Err(e) => anyhow::bail!("Failed to resolve '{}': {}", slug, e),
    }

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &AppLinkService, slug: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let url = match service.resolve(slug).await {
        Ok(url) => url,
        Err(LinkError::NotFound) => {
            println!("{}", format!("⚠️  No link under '{}'", slug).yellow());
            return Ok(());
        }
        Err(e) => anyhow::bail!("Database error: {}", e),
    };

    println!("  Slug: {}", slug.cyan());
    println!("  URL:  {}", url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links_count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
