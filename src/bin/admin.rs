//! CLI administration tool for linkbio.
//!
//! Inspects and maintains accounts and links directly in the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Count users and links
//! cargo run --bin admin -- stats
//!
//! # Show a user
//! cargo run --bin admin -- user show alice
//!
//! # Remove a user (asks for confirmation unless -y is given)
//! cargo run --bin admin -- user remove 42
//!
//! # List a user's links
//! cargo run --bin admin -- links alice
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use linkbio::application::services::{LinkService, UserService};
use linkbio::config::Config;
use linkbio::domain::errors::{LinkError, UserError};
use linkbio::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkbio.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show user and link counts
    Stats,

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// List the links owned by a user
    Links {
        /// Owner username, matched exactly
        owner: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Show a user by username
    Show { username: String },

    /// Remove a user by id
    Remove {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

struct Services {
    users: UserService<PgUserRepository>,
    links: LinkService<PgLinkRepository>,
}

impl Services {
    fn new(pool: &PgPool) -> Self {
        let pool = Arc::new(pool.clone());
        Self {
            users: UserService::new(Arc::new(PgUserRepository::new(pool.clone()))),
            links: LinkService::new(Arc::new(PgLinkRepository::new(pool))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let services = Services::new(&pool);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&services).await?,
        Commands::User { action } => handle_user_action(action, &services).await?,
        Commands::Links { owner } => list_links(&services, &owner).await?,
    }

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
    }

    Ok(())
}

/// Displays the number of users and links.
async fn handle_stats(services: &Services) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users = services.users.count_users().await?;
    let links = services.links.count_links().await?;

    println!("  Users: {}", users.to_string().bright_green().bold());
    println!("  Links: {}", links.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, services: &Services) -> Result<()> {
    match action {
        UserAction::Show { username } => show_user(services, &username).await,
        UserAction::Remove { id, yes } => remove_user(services, id, yes).await,
    }
}

async fn show_user(services: &Services, username: &str) -> Result<()> {
    let user = match services.users.get_user_by_username(username).await {
        Ok(user) => user,
        Err(UserError::UserNotFound) => {
            println!("{}", format!("⚠️  No user named '{username}'").yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", "👤 User".bright_blue().bold());
    println!();
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email);
    println!(
        "  Created:  {}",
        user.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Removes a user after a confirmation prompt.
///
/// The user's links are kept; remove them separately if needed.
async fn remove_user(services: &Services, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Remove User".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove user #{id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match services.users.remove_user(id).await {
        Ok(user) => {
            println!(
                "{} {}",
                "✅ Removed".green().bold(),
                user.username.cyan()
            );
        }
        Err(UserError::UserNotFound) => {
            println!("{}", format!("⚠️  No user with id {id}").yellow());
        }
        Err(err) => return Err(err.into()),
    }
    println!();

    Ok(())
}

/// Lists an owner's links in store order.
///
/// # Output Format
///
/// ```text
/// 🔗 Links of alice
///
///   Link ID                               Text                 URL
///   ──────────────────────────────────────────────────────────────────────
///   5f0c2a0e-9b7e-4a55-9d4c-1f3c0d3f9f10  Blog                 blog.example.com
/// ```
async fn list_links(services: &Services, owner: &str) -> Result<()> {
    println!("{}", format!("🔗 Links of {owner}").bright_blue().bold());
    println!();

    let links = match services.links.get_links_by_username(owner).await {
        Ok(links) => links,
        Err(LinkError::NoLinksFound) => {
            println!("{}", "  No links found".yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "  {:<37} {:<20} {}",
        "Link ID".bright_white().bold(),
        "Text".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for link in &links {
        println!(
            "  {:<37} {:<20} {}",
            link.link_id.bright_black(),
            link.display_text.cyan(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}
