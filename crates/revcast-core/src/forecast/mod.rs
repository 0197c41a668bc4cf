//! Forecasting - three independent methods combined into one ensemble
//!
//! ## Methods
//!
//! - **Trend-seasonal** - projects the last value along the fitted slope, adds
//!   a share of the positional seasonal deviation and a small random walk
//! - **Exponential smoothing** - flat smoothed level, fixed confidence
//! - **Linear regression** - extrapolates the least-squares line
//!
//! The methods form a closed set, so the ensemble iterates [`ForecastMethod::ALL`]
//! rather than holding trait objects.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use revcast_core::forecast::ensemble_forecast;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let predictions = ensemble_forecast(&series, 3, &config.forecast, &mut rng);
//! ```

pub mod ensemble;
pub mod regression;
pub mod smoothing;
pub mod trend_seasonal;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;
use crate::models::{PeriodPrediction, TimePoint};

pub use ensemble::{combine, ensemble_forecast};
pub use regression::linear_regression_forecast;
pub use smoothing::exponential_smoothing;
pub use trend_seasonal::{default_forecast, trend_seasonal_forecast};

/// The forecasting strategies feeding the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    TrendSeasonal,
    ExponentialSmoothing,
    LinearRegression,
}

impl ForecastMethod {
    /// Every method, in ensemble order
    pub const ALL: [ForecastMethod; 3] = [
        Self::TrendSeasonal,
        Self::ExponentialSmoothing,
        Self::LinearRegression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrendSeasonal => "trend_seasonal",
            Self::ExponentialSmoothing => "exponential_smoothing",
            Self::LinearRegression => "linear_regression",
        }
    }

    /// Forecast `horizon` periods; may return fewer when the series is too short
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        series: &[TimePoint],
        horizon: usize,
        config: &ForecastConfig,
        rng: &mut R,
    ) -> Vec<PeriodPrediction> {
        match self {
            Self::TrendSeasonal => trend_seasonal_forecast(series, horizon, config, rng),
            Self::ExponentialSmoothing => {
                exponential_smoothing(series, horizon, config.smoothing_alpha)
            }
            Self::LinearRegression => linear_regression_forecast(series, horizon),
        }
    }
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ForecastMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "trend_seasonal" => Ok(Self::TrendSeasonal),
            "exponential_smoothing" => Ok(Self::ExponentialSmoothing),
            "linear_regression" => Ok(Self::LinearRegression),
            _ => Err(format!("Unknown forecast method: {}", s)),
        }
    }
}
