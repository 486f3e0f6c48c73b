//! CLI administration tool for slug-shortener.
//!
//! Creates and inspects mappings directly against the database, through the
//! same service the HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping (prompts for the URL when --url is omitted)
//! cargo run --bin admin -- create --url https://example.com --slug ex1
//!
//! # Show where a slug points
//! cargo run --bin admin -- resolve ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use slug_shortener::application::services::{Resolution, ShortenError, ShortenerService};
use slug_shortener::domain::entities::UrlMapping;
use slug_shortener::infrastructure::persistence::PgMappingStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
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
    /// Create a new mapping
    Create {
        /// Preferred slug (generated if omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Target URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Show the target of a slug
    Resolve {
        slug: String,
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
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let service = ShortenerService::new(Arc::new(PgMappingStore::new(Arc::new(pool))));

    match cli.command {
        Commands::Create { slug, url } => create_mapping(&service, slug, url).await?,
        Commands::Resolve { slug } => resolve_slug(&service, &slug).await,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Creates a mapping, prompting for the URL if it was not passed.
async fn create_mapping(
    service: &ShortenerService,
    slug: Option<String>,
    url: Option<String>,
) -> Result<()> {
    println!("{}", "Create mapping".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let result = service.create_mapping(slug, Some(url)).await;
    report_created(result)
}

/// Prints the outcome of a create. Anything but a new mapping is an error, so
/// the process exits non-zero.
fn report_created(result: Result<UrlMapping, ShortenError>) -> Result<()> {
    match result {
        Ok(mapping) => {
            println!("{}", "Mapping created".green().bold());
            println!("  Slug:   {}", mapping.slug.cyan());
            println!("  Target: {}", mapping.target.bright_white());
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            println!();
            Ok(())
        }
        Err(ShortenError::SlugInUse { slug }) => {
            println!("{} {}", "Slug already in use:".red().bold(), slug.cyan());
            Err(anyhow::anyhow!("Slug '{}' is already in use", slug))
        }
        Err(ShortenError::Invalid(errors)) => {
            println!("{}", "Invalid input:".red().bold());
            for line in errors.to_string().lines() {
                println!("  {}", line.yellow());
            }
            Err(anyhow::anyhow!("Invalid mapping input"))
        }
        Err(ShortenError::Store(e)) => Err(anyhow::anyhow!("Failed to create mapping: {}", e)),
    }
}

/// Prints the target of a slug, or why it could not be resolved.
async fn resolve_slug(service: &ShortenerService, slug: &str) {
    match service.resolve_slug(slug).await {
        Resolution::Redirect(target) => {
            println!("  {} -> {}", slug.cyan(), target.bright_white());
        }
        Resolution::NotFound(miss) => {
            println!("  {}", miss.message().yellow());
        }
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &ShortenerService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service.ping().await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_report_created_ok() {
        let mapping = UrlMapping {
            slug: "ex1".to_string(),
            target: "https://example.com".to_string(),
            created_at: Utc::now(),
        };

        assert!(report_created(Ok(mapping)).is_ok());
    }

    #[test]
    fn test_report_created_slug_in_use_fails() {
        let result = report_created(Err(ShortenError::SlugInUse {
            slug: "ex1".to_string(),
        }));

        assert!(result.unwrap_err().to_string().contains("already in use"));
    }

    #[test]
    fn test_report_created_invalid_input_fails() {
        let mut errors = ValidationErrors::new();
        errors.add("url", ValidationError::new("required"));

        assert!(report_created(Err(ShortenError::Invalid(errors))).is_err());
    }
}
