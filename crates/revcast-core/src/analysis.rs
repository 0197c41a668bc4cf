//! Series analysis - decomposes a dated amount series into summary statistics
//!
//! The analyzer never sorts: callers hand it points in chronological order
//! (the loaders in [`crate::loader`] do this).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::TimePoint;
use crate::stats::{self, TrendLine, SEASON_LENGTH};

/// Minimum number of points needed before a series is analyzed
pub const MIN_ANALYSIS_POINTS: usize = 4;

/// Short and long moving averages of the series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub ma3: Vec<f64>,
    pub ma7: Vec<f64>,
}

/// Snapshot of a series, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    pub trend: TrendLine,
    /// Positional deviation per bucket, present only with 12+ points
    pub seasonality: Option<[f64; SEASON_LENGTH]>,
    pub volatility: f64,
    pub moving_averages: MovingAverages,
    pub last_value: f64,
    pub growth_rate: f64,
    pub data_points: usize,
}

/// Raw amounts in input order
pub fn amounts(series: &[TimePoint]) -> Vec<f64> {
    series.iter().map(|p| p.amount).collect()
}

/// Analyze a chronologically ordered series
///
/// Returns `None` when fewer than [`MIN_ANALYSIS_POINTS`] points are given.
pub fn analyze(series: &[TimePoint]) -> Option<SeriesAnalysis> {
    if series.len() < MIN_ANALYSIS_POINTS {
        debug!(points = series.len(), "Series too short to analyze");
        return None;
    }

    let values = amounts(series);
    let trend = stats::trend(&values);
    let volatility = stats::volatility(&values);
    let analysis = SeriesAnalysis {
        trend,
        seasonality: stats::seasonality(&values),
        volatility,
        moving_averages: MovingAverages {
            ma3: stats::moving_average(&values, 3),
            ma7: stats::moving_average(&values, 7),
        },
        last_value: values[values.len() - 1],
        growth_rate: stats::growth_rate(&values),
        data_points: values.len(),
    };

    debug!(
        points = analysis.data_points,
        slope = analysis.trend.slope,
        r_squared = analysis.trend.r_squared,
        volatility = analysis.volatility,
        seasonal = analysis.seasonality.is_some(),
        "Series analyzed"
    );

    Some(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::monthly_series;

    #[test]
    fn test_analyze_requires_four_points() {
        assert!(analyze(&[]).is_none());
        assert!(analyze(&monthly_series(&[1.0, 2.0, 3.0])).is_none());
        assert!(analyze(&monthly_series(&[1.0, 2.0, 3.0, 4.0])).is_some());
    }

    #[test]
    fn test_analyze_short_series_has_no_seasonality() {
        let analysis = analyze(&monthly_series(&[100.0, 120.0, 110.0, 130.0, 125.0])).unwrap();
        assert!(analysis.seasonality.is_none());
        assert_eq!(analysis.last_value, 125.0);
        assert_eq!(analysis.data_points, 5);
        assert_eq!(analysis.moving_averages.ma3.len(), 3);
        // Fewer than 7 points: passed through unchanged
        assert_eq!(analysis.moving_averages.ma7.len(), 5);
    }

    #[test]
    fn test_analyze_uses_input_order() {
        let mut series = monthly_series(&[100.0, 200.0, 300.0, 400.0]);
        series.reverse();
        let analysis = analyze(&series).unwrap();
        assert_eq!(analysis.last_value, 100.0);
        assert!(analysis.trend.slope < 0.0);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let values: Vec<f64> = (0..14).map(|i| 1000.0 + (i as f64 * 37.0) % 250.0).collect();
        let series = monthly_series(&values);
        let first = analyze(&series).unwrap();
        let second = analyze(&series).unwrap();
        assert_eq!(first, second);
        assert!(first.seasonality.is_some());
    }
}
