//! Engine configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/revcast/config/engine.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their built-in defaults, which reproduce the
//! documented forecasting constants exactly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/engine.toml");

/// Forecasting parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Horizon used when the caller does not ask for one
    pub default_horizon: usize,
    /// Largest horizon the CLI will request
    pub max_horizon: usize,
    /// Exponential smoothing factor
    pub smoothing_alpha: f64,
    /// Share of the seasonal deviation added to trend projections
    pub seasonal_influence: f64,
    /// Width of the random walk term, as a fraction of volatility
    pub noise_scale: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon: 3,
            max_horizon: 12,
            smoothing_alpha: 0.3,
            seasonal_influence: 0.3,
            noise_scale: 0.1,
        }
    }
}

impl ForecastConfig {
    /// Clamp a requested horizon into `1..=max_horizon`
    pub fn clamp_horizon(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_horizon.max(1))
    }
}

/// Budget insight parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub monthly_limit: f64,
    pub currency_symbol: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            monthly_limit: 50_000.0,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Model identification reported by the status snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub version: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: "2.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
    pub forecast: ForecastConfig,
    pub budget: BudgetConfig,
    pub model: ModelConfig,
}

impl EngineConfig {
    /// Load configuration (explicit path, then data dir override, then default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        match path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading engine config");
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Self::parse(&content)
            }
            _ => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let alpha = self.forecast.smoothing_alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::Config(format!(
                "forecast.smoothing_alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        if self.forecast.max_horizon == 0 {
            return Err(Error::Config(
                "forecast.max_horizon must be at least 1".to_string(),
            ));
        }
        if !(self.budget.monthly_limit.is_finite() && self.budget.monthly_limit > 0.0) {
            return Err(Error::Config(format!(
                "budget.monthly_limit must be positive, got {}",
                self.budget.monthly_limit
            )));
        }
        Ok(())
    }
}

/// Default data directory (~/.local/share/revcast on Linux)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("revcast"))
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    default_data_dir().map(|d| d.join("config").join("engine.toml"))
}
