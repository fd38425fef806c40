mod commands;
mod dates;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outfit_core::config::PlannerConfig;
use outfit_core::{CalendarView, Catalog, Category, OutfitPlanner};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outfit-planner")]
#[command(about = "Plan what to wear, day by day")]
struct Cli {
    /// Read the catalog from this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive planning session (default)
    Session {
        /// Day to start on (YYYY-MM-DD or e.g. "tomorrow"), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List the clothing catalog
    Catalog {
        /// Only list this category (tops, bottoms, accessories)
        #[arg(short, long)]
        category: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show where the config file lives
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Session { date: None }) {
        Commands::Session { date } => {
            let calendar = match date {
                Some(input) => CalendarView::new(Some(dates::parse_date(&input)?)),
                None => CalendarView::default(),
            };
            let planner = OutfitPlanner::with_calendar(load_catalog(config)?, calendar);
            commands::session::run(planner)
        }
        Commands::Catalog { category, json } => {
            let category = category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?;
            commands::catalog::run(&load_catalog(config)?, category, json)
        }
        Commands::Config => commands::config::run(config),
    }
}

fn load_catalog(config_override: Option<&Path>) -> Result<Catalog> {
    let config = match config_override {
        Some(path) => PlannerConfig::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => PlannerConfig::load().context("Could not load config")?,
    };

    Ok(config.catalog())
}
