//! CLI administration tool for linkdrop.
//!
//! Inspects the shared Redis store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check store connectivity
//! cargo run --bin admin -- ping
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve ab12
//!
//! # Show a client's creation count for the current window
//! cargo run --bin admin -- quota show 203.0.113.7
//!
//! # Give a client a fresh window
//! cargo run --bin admin -- quota reset 203.0.113.7
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` (or `REDIS_HOST` and friends, required): Redis connection
//! - `APP_ENV` / `RATE_LIMIT_MAX`: used to display the applicable ceiling

use linkdrop::config::{Config, mask_connection_string};
use linkdrop::domain::repositories::{AliasStore, CounterStore};
use linkdrop::infrastructure::store::RedisStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing linkdrop.
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
    /// Check store connectivity
    Ping,

    /// Show the destination of an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Inspect or reset rate-limit counters
    Quota {
        #[command(subcommand)]
        action: QuotaAction,
    },
}

/// Rate-limit counter subcommands.
#[derive(Subcommand)]
enum QuotaAction {
    /// Show the creation count of a client identity
    Show {
        /// Client identity (usually an IP address)
        identity: String,
    },

    /// Delete the counter of a client identity
    Reset {
        /// Client identity (usually an IP address)
        identity: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let redis_url = config
        .redis_url
        .clone()
        .context("REDIS_URL must be set")?;

    let store = RedisStore::connect(&redis_url, config.store_timeout())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&redis_url)
            )
        })?;

    match cli.command {
        Commands::Ping => handle_ping(&store, &redis_url).await?,
        Commands::Resolve { alias } => handle_resolve(&store, &alias).await?,
        Commands::Quota { action } => handle_quota_action(action, &store, &config).await?,
    }

    Ok(())
}

/// Checks that the store answers PING.
async fn handle_ping(store: &RedisStore, redis_url: &str) -> Result<()> {
    println!("{}", "Store check".bright_blue().bold());
    println!();
    println!("  Redis: {}", mask_connection_string(redis_url).cyan());

    if store.health_check().await {
        println!("  Status: {}", "OK".green().bold());
    } else {
        println!("  Status: {}", "NOT RESPONDING".red().bold());
        anyhow::bail!("Store did not answer PING");
    }

    println!();
    Ok(())
}

/// Prints the destination of an alias, if it is still live.
async fn handle_resolve(store: &RedisStore, alias: &str) -> Result<()> {
    let destination = store
        .get(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?;

    match destination {
        Some(url) => println!("  {} -> {}", alias.cyan(), url.bright_green()),
        None => println!("  {} {}", alias.cyan(), "not found or expired".yellow()),
    }

    Ok(())
}

/// Dispatches rate-limit counter commands.
async fn handle_quota_action(action: QuotaAction, store: &RedisStore, config: &Config) -> Result<()> {
    match action {
        QuotaAction::Show { identity } => show_quota(store, &identity, config.rate_limit_max).await,
        QuotaAction::Reset { identity, yes } => reset_quota(store, &identity, yes).await,
    }
}

/// Shows how much of its daily quota an identity has used.
///
/// # Output Format
///
/// ```text
/// Quota for 203.0.113.7
///
///   Used:      3 / 10
///   Remaining: 7
/// ```
async fn show_quota(store: &RedisStore, identity: &str, limit: u64) -> Result<()> {
    println!("{} {}", "Quota for".bright_blue().bold(), identity.cyan());
    println!();

    let used = store
        .current(identity)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?
        .unwrap_or(0);

    let used_display = if used > limit {
        used.to_string().red().bold()
    } else {
        used.to_string().bright_green().bold()
    };

    println!("  Used:      {} / {}", used_display, limit);
    println!(
        "  Remaining: {}",
        limit.saturating_sub(used).to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an identity's counter after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
async fn reset_quota(store: &RedisStore, identity: &str, skip_confirm: bool) -> Result<()> {
    println!("{} {}", "Reset quota for".bright_blue().bold(), identity.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Reset this counter?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let existed = store
        .reset(identity)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reset counter: {}", e))?;

    if existed {
        println!("{}", "Counter reset".green().bold());
    } else {
        println!("{}", "No active counter for this identity".yellow());
    }
    println!();

    Ok(())
}
