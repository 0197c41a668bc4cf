//! Revcast Core Library
//!
//! Forecasting and analytics for small-business revenue and expenses:
//! - Statistical primitives (moving average, trend, seasonality, volatility)
//! - Series analysis snapshots
//! - Trend-seasonal, exponential smoothing and regression forecasts, combined
//!   into an ensemble
//! - Best / likely / worst scenarios and key-driver explanations
//! - Keyword-based expense categorization and budget insights
//! - Revenue analytics and dashboard KPIs
//! - Data loading (JSON/CSV) and layered configuration

pub mod analysis;
pub mod analytics;
pub mod budget;
pub mod classifier;
pub mod config;
pub mod drivers;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod format;
pub mod loader;
pub mod models;
pub mod retention;
pub mod sample;
pub mod scenarios;
pub mod stats;
pub mod status;

#[cfg(test)]
mod test_support;

pub use analysis::{analyze, MovingAverages, SeriesAnalysis};
pub use analytics::{dashboard_kpis, revenue_analytics, AnalyticsPeriod, DashboardKpis, RevenueAnalytics};
pub use budget::{budget_insights, BudgetReport, BudgetStatus, CategoryTotal};
pub use classifier::{suggest_category, CategoryClassifier, CategoryRule};
pub use config::EngineConfig;
pub use drivers::{identify_key_drivers, Driver};
pub use engine::{Dashboard, RevcastEngine};
pub use error::{Error, Result};
pub use forecast::{ensemble_forecast, ForecastMethod};
pub use loader::{load_expenses, load_series, DataSet};
pub use models::*;
pub use retention::{estimate_retention, ClientRetention};
pub use scenarios::{generate_scenarios, Scenario, ScenarioTier, Tone};
pub use stats::TrendLine;
pub use status::{ModelMetrics, ModelStatus, ModelStatusCache};
