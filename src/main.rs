//! Webtoon Favorites — Entry Point
//!
//! Command-line shell over the library: browse categories, view a
//! category's featured webtoon, toggle and list favorites, and run a
//! session-only vote.
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml (defaults when absent) + validate
//! 3. Init tracing (JSON structured logging on stderr)
//! 4. Open the configured LocalStore adapter
//! 5. Build the FavoritesRepository and dispatch the command

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use webtoon_favorites::adapters::persistence::open_store;
use webtoon_favorites::config::{self, AppConfig};
use webtoon_favorites::domain::catalog::{default_categories, find_category};
use webtoon_favorites::domain::favorite::FavoritesCollection;
use webtoon_favorites::domain::votes::{BarChart, VoteTally};
use webtoon_favorites::ports::LocalStore;
use webtoon_favorites::usecases::{FavoriteToggle, FavoritesRepository};

/// Webtoon browser with locally persisted favorites
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List browsable categories
    Categories,
    /// Show a category's featured webtoon and its favorite state
    Show {
        /// Category id or title
        category: String,
    },
    /// Toggle the favorite state of a category's featured webtoon
    Toggle {
        /// Category id or title
        category: String,
    },
    /// List favorites in the order they were added
    Favorites,
    /// Remove a favorite by id
    Remove {
        /// Favorite id
        id: String,
    },
    /// Cast session-only votes and print the tally
    Vote {
        /// Candidate labels, one vote each
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Check that the favorites store accepts writes
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Parse arguments ──────────────────────────────────
    let args = Args::parse();

    // ── 2. Load configuration ───────────────────────────────
    let config = config::loader::load_or_default(&args.config)
        .context("Failed to load configuration")?;

    // ── 3. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.storage.backend,
        "Starting"
    );

    // ── 4. Open the store ───────────────────────────────────
    let store = open_store(&config.storage)
        .await
        .context("Failed to open favorites store")?;

    // ── 5. Dispatch ─────────────────────────────────────────
    let repo = FavoritesRepository::new(store, config.storage.favorites_key.clone());
    run(args.command, &config, &repo).await
}

async fn run(
    command: Command,
    config: &AppConfig,
    repo: &FavoritesRepository<dyn LocalStore>,
) -> Result<()> {
    match command {
        Command::Categories => {
            for category in default_categories() {
                println!("{:>3}  {:<10} {}", category.id, category.title, category.image);
            }
        }
        Command::Show { category } => {
            let category = find_category(&category)?;
            let mut toggle = FavoriteToggle::new(category.featured_webtoon());
            toggle
                .activate(repo)
                .await
                .context("Failed to load favorites")?;
            print_detail(&toggle);
        }
        Command::Toggle { category } => {
            let category = find_category(&category)?;
            let mut toggle = FavoriteToggle::new(category.featured_webtoon());
            let result = toggle.toggle(repo).await;
            print_detail(&toggle);
            result.context("Could not update favorites, try again")?;
        }
        Command::Favorites => {
            let favorites = repo.load().await.context("Failed to load favorites")?;
            print_favorites(&favorites);
        }
        Command::Remove { id } => {
            let favorites = repo
                .remove(&id)
                .await
                .with_context(|| format!("Failed to remove favorite {id}"))?;
            print_favorites(&favorites);
        }
        Command::Vote { labels } => {
            let mut tally = VoteTally::new(config.votes.candidates.iter().cloned())?;
            for label in &labels {
                tally.vote(label)?;
            }
            print_chart(&tally.chart());
            if let Some(leader) = tally.leader() {
                println!("Leading: {leader}");
            }
        }
        Command::Health => {
            let healthy = repo.is_healthy().await;
            println!("{}", if healthy { "healthy" } else { "unhealthy" });
            anyhow::ensure!(healthy, "Favorites store is not writable");
        }
    }
    Ok(())
}

fn print_detail(toggle: &FavoriteToggle) {
    let item = toggle.item();
    println!("{}", item.title);
    println!("{}", item.image);
    println!("{}", item.description);
    println!("[{}]", toggle.action_label());
}

fn print_favorites(favorites: &FavoritesCollection) {
    if favorites.is_empty() {
        println!("No favorites yet");
        return;
    }
    for item in favorites {
        println!("{:>3}  {}  {}", item.id, item.title, item.image);
    }
}

fn print_chart(chart: &BarChart) {
    let width = chart.labels.iter().map(String::len).max().unwrap_or(0);
    for (label, count) in chart.labels.iter().zip(&chart.data) {
        let bar = "#".repeat(*count as usize);
        println!("{label:<width$}  {bar} {count}");
    }
}
