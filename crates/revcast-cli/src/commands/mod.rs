//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared session setup (config, data set, engine) and output helpers
//! - `forecast` - Series analysis and forecasting commands
//! - `insights` - Expense categorization and budget commands
//! - `reports` - Revenue analytics, dashboard and model status commands

pub mod core;
pub mod forecast;
pub mod insights;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use forecast::*;
pub use insights::*;
pub use reports::*;
