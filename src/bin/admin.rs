//! CLI administration tool for link-cloner.
//!
//! Creates and inspects links directly in the PostgreSQL store, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a masked link with UTM parameters
//! cargo run --bin admin -- link create "https://shop.example.com/p?id=1" --utm --tracking-id spring
//!
//! # Show a stored link
//! cargo run --bin admin -- link show ab12cd34
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `ALT_DOMAIN` (optional): used by `link create --alt-domain`

use link_cloner::application::services::LinkService;
use link_cloner::config::{self, Config, mask_connection_string};
use link_cloner::domain::entities::LinkOptions;
use link_cloner::infrastructure::persistence::PgLinkRepository;
use link_cloner::utils::url_rewriter::UrlRewriter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-cloner.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new link
    Create {
        /// Destination URL (http or https)
        url: String,

        /// Merge UTM parameters into the destination
        #[arg(long)]
        utm: bool,

        /// Value for utm_content
        #[arg(short, long)]
        tracking_id: Option<String>,

        /// Redirect directly instead of showing the masking page
        #[arg(long)]
        no_mask: bool,

        /// Build the short link on the alternate domain
        #[arg(long)]
        alt_domain: bool,

        /// Domain for the short link (implies --alt-domain)
        #[arg(long)]
        custom_domain: Option<String>,

        /// Base URL used when no alternate domain applies
        #[arg(long, default_value = "http://localhost:5000")]
        base_url: String,
    },

    /// Show a stored link
    Show {
        /// Short id
        id: String,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_* components) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

fn link_service(pool: &PgPool, config: &Config) -> LinkService<PgLinkRepository> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    LinkService::new(repository, UrlRewriter::new(config.alt_domain.clone()))
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = link_service(pool, config);

    match action {
        LinkAction::Create {
            url,
            utm,
            tracking_id,
            no_mask,
            alt_domain,
            custom_domain,
            base_url,
        } => {
            let use_alt_domain = alt_domain || custom_domain.is_some();
            let options = LinkOptions::new(use_alt_domain, custom_domain, utm, tracking_id, !no_mask);

            create_link(&service, &url, options, &base_url).await?;
        }
        LinkAction::Show { id } => {
            show_link(&service, &id).await?;
        }
    }

    Ok(())
}

/// Creates a link and prints the external URL.
async fn create_link(
    service: &LinkService<PgLinkRepository>,
    url: &str,
    options: LinkOptions,
    base_url: &str,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let cloned = service
        .clone_link(url, options, base_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("  ID:          {}", cloned.link.id.cyan());
    println!("  Short link:  {}", cloned.external.url.bright_yellow().bold());
    println!("  Destination: {}", cloned.link.target.bright_white());
    println!(
        "  Masked:      {}",
        if cloned.link.apply_mask {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    if let Some(ref tracking_id) = cloned.link.tracking_id {
        println!("  Tracking ID: {}", tracking_id.cyan());
    }
    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();

    Ok(())
}

/// Prints a stored link.
async fn show_link(service: &LinkService<PgLinkRepository>, id: &str) -> Result<()> {
    let link = service
        .find_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔎 Link".bright_blue().bold());
    println!();
    println!("  ID:          {}", link.id.cyan());
    println!("  Destination: {}", link.target.bright_white());
    println!(
        "  Tracking ID: {}",
        link.tracking_id.as_deref().unwrap_or("-").cyan()
    );
    println!("  UTM added:   {}", link.add_utm);
    println!("  Alt domain:  {}", link.use_alt_domain);
    println!("  Masked:      {}", link.apply_mask);
    println!(
        "  Created:     {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays link counts.
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = link_service(pool, config);
    let links_count = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let masked_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE apply_mask")
        .fetch_one(pool)
        .await?;

    let utm_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE add_utm")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:          {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Masked:         {}",
        masked_count.to_string().bright_green().bold()
    );
    println!(
        "  With UTM:       {}",
        utm_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
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

            println!("  URL:        {}", mask_connection_string(database_url));
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
