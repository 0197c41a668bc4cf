//! Exponential smoothing
//!
//! The level is seeded with the first observed value and every step blends in
//! the single last observed value again:
//! `level = alpha * last + (1 - alpha) * level`. The sequence therefore
//! converges toward the last value instead of tracking the series history.

use crate::models::{PeriodPrediction, TimePoint, TrendDirection};

const SMOOTHING_CONFIDENCE: u8 = 75;

pub fn exponential_smoothing(
    series: &[TimePoint],
    horizon: usize,
    alpha: f64,
) -> Vec<PeriodPrediction> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };

    let mut level = first.amount;
    (1..=horizon)
        .map(|i| {
            level = alpha * last.amount + (1.0 - alpha) * level;
            PeriodPrediction {
                period: i as u32,
                amount: level,
                confidence: SMOOTHING_CONFIDENCE,
                trend: TrendDirection::Stable,
                change: "0%".to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::monthly_series;

    #[test]
    fn test_empty_series() {
        assert!(exponential_smoothing(&[], 3, 0.3).is_empty());
    }

    #[test]
    fn test_reuses_last_value_every_step() {
        let series = monthly_series(&[100.0, 500.0, 200.0]);
        let predictions = exponential_smoothing(&series, 3, 0.3);

        // 0.3 * 200 + 0.7 * 100 = 130
        assert!((predictions[0].amount - 130.0).abs() < 1e-9);
        // 0.3 * 200 + 0.7 * 130 = 151
        assert!((predictions[1].amount - 151.0).abs() < 1e-9);
        // 0.3 * 200 + 0.7 * 151 = 165.7
        assert!((predictions[2].amount - 165.7).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_labels() {
        let series = monthly_series(&[10.0]);
        let predictions = exponential_smoothing(&series, 2, 0.3);
        assert_eq!(predictions.len(), 2);
        for p in predictions {
            assert_eq!(p.confidence, 75);
            assert_eq!(p.trend, TrendDirection::Stable);
            assert_eq!(p.change, "0%");
            assert!((p.amount - 10.0).abs() < 1e-9);
        }
    }
}
