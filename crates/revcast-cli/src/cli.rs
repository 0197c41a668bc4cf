//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Revcast - Revenue forecasting and expense insights
#[derive(Parser)]
#[command(name = "revcast")]
#[command(about = "Revenue forecasting and expense insights for small businesses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding revenue.{json,csv} and expenses.{json,csv}
    ///
    /// Defaults to ~/.local/share/revcast. When the data files are missing,
    /// the built-in sample data set is used.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Engine config file (overrides the data dir config and built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed random seed for reproducible forecasts and scenarios
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the revenue series (trend, seasonality, volatility)
    Analyze,

    /// Forecast revenue with scenarios and key drivers
    Forecast {
        /// Number of periods to forecast (clamped to the configured maximum)
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Revenue totals by category and source
    Analytics {
        /// Period: 3months, 6months, 12months
        #[arg(short, long, default_value = "12months")]
        period: String,
    },

    /// Suggest a category for an expense description
    Categorize {
        /// Expense description (e.g., "Uber ride to airport")
        description: String,
    },

    /// Budget insights for the expense data
    Budget {
        /// Monthly limit (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<f64>,
    },

    /// Show dashboard KPIs and near-term predictions
    Dashboard,

    /// Show model status
    Status {
        /// Include the performance and data quality blocks
        #[arg(long)]
        metrics: bool,
    },
}
