//! Ensemble combiner - averages the per-period output of every method

use rand::Rng;
use tracing::debug;

use crate::config::ForecastConfig;
use crate::models::{PeriodPrediction, TimePoint, TrendDirection};

use super::ForecastMethod;

/// Average amount and confidence per period across the given forecasts
///
/// Forecasts shorter than `horizon` contribute only where they have an entry;
/// a period no forecast covers is omitted. The combined record carries the
/// `ensemble` trend label and a "0%" change.
pub fn combine(forecasts: &[Vec<PeriodPrediction>], horizon: usize) -> Vec<PeriodPrediction> {
    let mut combined = Vec::with_capacity(horizon);

    for i in 0..horizon {
        let entries: Vec<&PeriodPrediction> = forecasts.iter().filter_map(|f| f.get(i)).collect();
        if entries.is_empty() {
            continue;
        }

        let count = entries.len() as f64;
        let amount = entries.iter().map(|p| p.amount).sum::<f64>() / count;
        let confidence = entries.iter().map(|p| p.confidence as f64).sum::<f64>() / count;

        combined.push(PeriodPrediction {
            period: (i + 1) as u32,
            amount,
            confidence: confidence.round() as u8,
            trend: TrendDirection::Ensemble,
            change: "0%".to_string(),
        });
    }

    combined
}

/// Run every [`ForecastMethod`] and combine the results
pub fn ensemble_forecast<R: Rng + ?Sized>(
    series: &[TimePoint],
    horizon: usize,
    config: &ForecastConfig,
    rng: &mut R,
) -> Vec<PeriodPrediction> {
    let forecasts: Vec<Vec<PeriodPrediction>> = ForecastMethod::ALL
        .iter()
        .map(|method| {
            let predictions = method.forecast(series, horizon, config, rng);
            debug!(
                method = method.as_str(),
                periods = predictions.len(),
                "Forecast method complete"
            );
            predictions
        })
        .collect();

    combine(&forecasts, horizon)
}
