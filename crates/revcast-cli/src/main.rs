//! Revcast CLI - Revenue forecasting and expense insights
//!
//! Usage:
//!   revcast analyze                   Analyze the revenue series
//!   revcast forecast --horizon 6      Forecast with scenarios and drivers
//!   revcast categorize "Uber ride"    Suggest an expense category
//!   revcast budget --limit 50000      Budget insights

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let open_session = || {
        commands::open_session(
            cli.data_dir.as_deref(),
            cli.config.as_deref(),
            cli.seed,
            cli.json,
        )
    };

    match &cli.command {
        Commands::Analyze => commands::cmd_analyze(&open_session()?),
        Commands::Forecast { horizon } => commands::cmd_forecast(&mut open_session()?, *horizon),
        Commands::Analytics { period } => commands::cmd_analytics(&open_session()?, period),
        Commands::Categorize { description } => commands::cmd_categorize(description, cli.json),
        Commands::Budget { limit } => commands::cmd_budget(&open_session()?, *limit),
        Commands::Dashboard => commands::cmd_dashboard(&mut open_session()?),
        Commands::Status { metrics } => commands::cmd_status(&open_session()?, *metrics),
    }
}
