//! Validating facade over the analysis, forecasting and insight functions
//!
//! The free functions in the other modules accept anything and degrade to
//! defined results. [`RevcastEngine`] is the boundary a host layer calls: it
//! rejects invalid arguments, owns the random source and holds the model
//! status snapshot.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{self, SeriesAnalysis};
use crate::analytics::{self, AnalyticsPeriod, DashboardKpis, RevenueAnalytics};
use crate::budget::{self, BudgetReport};
use crate::classifier::CategoryClassifier;
use crate::config::EngineConfig;
use crate::drivers::{self, Driver};
use crate::error::{Error, Result};
use crate::forecast;
use crate::models::{CategorySuggestion, Expense, PeriodPrediction, TimePoint};
use crate::retention;
use crate::scenarios::{self, Scenario};
use crate::status::{ModelMetrics, ModelStatus, ModelStatusCache};

/// Number of predictions shown on the dashboard
pub const DASHBOARD_PERIODS: usize = 3;

/// Dashboard payload: KPIs, near-term predictions and the model status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub kpis: DashboardKpis,
    pub predictions: Vec<PeriodPrediction>,
    pub model_status: ModelStatus,
}

pub struct RevcastEngine {
    config: EngineConfig,
    rng: StdRng,
    status: ModelStatusCache,
    classifier: CategoryClassifier,
}

impl RevcastEngine {
    /// Create an engine; the RNG is seeded from `config.seed` when set
    pub fn new(config: EngineConfig, data_source: impl Into<String>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let status = ModelStatusCache::new(ModelStatus::new(
            config.model.version.clone(),
            data_source,
        ));
        Self {
            config,
            rng,
            status,
            classifier: CategoryClassifier::new(),
        }
    }

    /// Create an engine with a fixed seed, overriding the configured one
    pub fn with_seed(mut config: EngineConfig, data_source: impl Into<String>, seed: u64) -> Self {
        config.seed = Some(seed);
        Self::new(config, data_source)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze_series(&self, series: &[TimePoint]) -> Result<Option<SeriesAnalysis>> {
        validate_series(series)?;
        Ok(analysis::analyze(series))
    }

    /// Ensemble forecast; a zero horizon yields no predictions
    pub fn ensemble_forecast(
        &mut self,
        series: &[TimePoint],
        horizon: usize,
    ) -> Result<Vec<PeriodPrediction>> {
        validate_series(series)?;
        if horizon == 0 {
            return Ok(Vec::new());
        }
        Ok(forecast::ensemble_forecast(
            series,
            horizon,
            &self.config.forecast,
            &mut self.rng,
        ))
    }

    pub fn generate_scenarios(&mut self, series: &[TimePoint]) -> Result<Vec<Scenario>> {
        validate_series(series)?;
        let analysis = analysis::analyze(series);
        Ok(scenarios::generate_scenarios(
            analysis.as_ref(),
            &mut self.rng,
        ))
    }

    /// Key drivers; the retention rate is estimated from the series when not given
    pub fn identify_key_drivers(
        &self,
        series: &[TimePoint],
        retention_rate: Option<f64>,
    ) -> Result<Vec<Driver>> {
        validate_series(series)?;
        let rate = match retention_rate {
            Some(rate) if !(0.0..=1.0).contains(&rate) => {
                return Err(Error::InvalidArgument(format!(
                    "retention rate must be in [0, 1], got {}",
                    rate
                )));
            }
            Some(rate) => rate,
            None => retention::estimate_retention(series).rate,
        };
        let analysis = analysis::analyze(series);
        Ok(drivers::identify_key_drivers(analysis.as_ref(), rate))
    }

    pub fn suggest_category(&self, description: &str) -> Result<CategorySuggestion> {
        if description.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "description must not be empty".to_string(),
            ));
        }
        Ok(self.classifier.classify(description))
    }

    /// Budget report against `monthly_limit`, or the configured limit
    pub fn budget_insights(
        &self,
        expenses: &[Expense],
        monthly_limit: Option<f64>,
    ) -> Result<BudgetReport> {
        for (i, expense) in expenses.iter().enumerate() {
            check_amount(expense.amount, "expense", i)?;
        }
        let limit = monthly_limit.unwrap_or(self.config.budget.monthly_limit);
        if !(limit.is_finite() && limit > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "monthly limit must be positive, got {}",
                limit
            )));
        }
        Ok(budget::budget_insights(
            expenses,
            limit,
            &self.config.budget.currency_symbol,
        ))
    }

    pub fn revenue_analytics(
        &self,
        series: &[TimePoint],
        period: AnalyticsPeriod,
    ) -> Result<RevenueAnalytics> {
        validate_series(series)?;
        Ok(analytics::revenue_analytics(series, period))
    }

    pub fn dashboard(&mut self, revenue: &[TimePoint], expenses: &[Expense]) -> Result<Dashboard> {
        validate_series(revenue)?;
        for (i, expense) in expenses.iter().enumerate() {
            check_amount(expense.amount, "expense", i)?;
        }

        let kpis = analytics::dashboard_kpis(revenue, expenses);
        let predictions = self.ensemble_forecast(revenue, DASHBOARD_PERIODS)?;
        debug!(
            total_revenue = kpis.total_revenue,
            net_profit = kpis.net_profit,
            "Dashboard assembled"
        );

        Ok(Dashboard {
            kpis,
            predictions,
            model_status: self.status.snapshot().as_ref().clone(),
        })
    }

    pub fn model_status(&self) -> ModelStatus {
        self.status.snapshot().as_ref().clone()
    }

    /// Status snapshot with the reported performance and data quality blocks
    pub fn model_metrics(&self) -> ModelMetrics {
        ModelMetrics::for_status(self.model_status())
    }

    pub fn refresh_status(&self) -> ModelStatus {
        self.status.refresh().as_ref().clone()
    }

    pub fn set_data_source(&self, data_source: impl Into<String>) -> ModelStatus {
        self.status.set_data_source(data_source).as_ref().clone()
    }
}

fn check_amount(amount: f64, kind: &str, index: usize) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} {}: amount must be a non-negative number, got {}",
            kind,
            index + 1,
            amount
        )));
    }
    Ok(())
}

fn validate_series(series: &[TimePoint]) -> Result<()> {
    for (i, point) in series.iter().enumerate() {
        check_amount(point.amount, "point", i)?;
    }
    Ok(())
}
