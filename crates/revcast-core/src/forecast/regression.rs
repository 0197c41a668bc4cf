//! Linear regression extrapolation

use tracing::debug;

use crate::analysis::amounts;
use crate::format::percentage_change;
use crate::models::{PeriodPrediction, TimePoint, TrendDirection};
use crate::stats;

const REGRESSION_CONFIDENCE: u8 = 80;

/// Evaluate the fitted line at positions `len + 1 ..= len + horizon`
pub fn linear_regression_forecast(series: &[TimePoint], horizon: usize) -> Vec<PeriodPrediction> {
    if series.len() < 2 {
        debug!(points = series.len(), "Not enough points for regression");
        return Vec::new();
    }

    let values = amounts(series);
    let line = stats::trend(&values);
    let last = values[values.len() - 1];
    let n = values.len();
    let direction = if line.slope > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    (1..=horizon)
        .map(|i| {
            let prediction = line.at((n + i) as f64);
            PeriodPrediction {
                period: i as u32,
                amount: prediction.max(0.0),
                confidence: REGRESSION_CONFIDENCE,
                trend: direction,
                change: percentage_change(last, prediction),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::monthly_series;

    #[test]
    fn test_needs_two_points() {
        assert!(linear_regression_forecast(&monthly_series(&[5.0]), 3).is_empty());
    }

    #[test]
    fn test_extrapolates_line() {
        let series = monthly_series(&[100.0, 200.0, 300.0, 400.0]);
        let predictions = linear_regression_forecast(&series, 2);

        assert!((predictions[0].amount - 500.0).abs() < 1e-6);
        assert!((predictions[1].amount - 600.0).abs() < 1e-6);
        assert_eq!(predictions[0].trend, TrendDirection::Up);
        assert_eq!(predictions[0].change, "+25.0%");
        assert_eq!(predictions[1].confidence, 80);
    }

    #[test]
    fn test_floors_at_zero() {
        let series = monthly_series(&[300.0, 200.0, 100.0]);
        let predictions = linear_regression_forecast(&series, 3);

        assert!((predictions[0].amount - 0.0).abs() < 1e-6);
        assert_eq!(predictions[2].amount, 0.0);
        assert_eq!(predictions[2].trend, TrendDirection::Down);
        // Change is measured on the unfloored line value
        assert_eq!(predictions[2].change, "-300.0%");
    }

    #[test]
    fn test_flat_series_labelled_down() {
        let predictions = linear_regression_forecast(&monthly_series(&[50.0, 50.0]), 1);
        assert_eq!(predictions[0].trend, TrendDirection::Down);
        assert_eq!(predictions[0].change, "+0.0%");
    }
}
