//! Statistical primitives over plain amount sequences
//!
//! Every function here is pure and deterministic. Inputs shorter than a
//! function needs degrade to a defined value (the input itself, `None`, or 0)
//! instead of producing NaN.

use serde::{Deserialize, Serialize};

/// Number of positional buckets used by [`seasonality`]
pub const SEASON_LENGTH: usize = 12;

/// Least-squares fit of value against 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// `1 - ssRes/ssTot`, or 0 when the input has no variance
    pub r_squared: f64,
}

impl TrendLine {
    /// Value of the fitted line at a 1-based position
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Trailing moving average
///
/// Returns one mean per full window, so the output has
/// `values.len() - window + 1` items. Inputs shorter than the window (and a
/// zero window) are returned unchanged.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return values.to_vec();
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Ordinary least-squares trend over positions 1..=n
pub fn trend(values: &[f64]) -> TrendLine {
    let n = values.len() as f64;
    if values.is_empty() {
        return TrendLine {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = (i + 1) as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // A single point has no spread in x
    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let fitted = slope * (i + 1) as f64 + intercept;
        ss_res += (y - fitted).powi(2);
        ss_tot += (y - mean_y).powi(2);
    }
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    TrendLine {
        slope,
        intercept,
        r_squared,
    }
}

/// Per-bucket deviation from the overall mean
///
/// Values are bucketed by `index % 12`, not by the calendar month of the
/// underlying dates. Requires at least 12 values.
pub fn seasonality(values: &[f64]) -> Option<[f64; SEASON_LENGTH]> {
    if values.len() < SEASON_LENGTH {
        return None;
    }

    let mut sums = [0.0; SEASON_LENGTH];
    let mut counts = [0usize; SEASON_LENGTH];
    for (i, &value) in values.iter().enumerate() {
        sums[i % SEASON_LENGTH] += value;
        counts[i % SEASON_LENGTH] += 1;
    }

    let overall = values.iter().sum::<f64>() / values.len() as f64;

    let mut deviations = [0.0; SEASON_LENGTH];
    for (bucket, deviation) in deviations.iter_mut().enumerate() {
        if counts[bucket] > 0 {
            *deviation = sums[bucket] / counts[bucket] as f64 - overall;
        }
    }
    Some(deviations)
}

/// Population standard deviation of period-over-period relative change
///
/// Pairs whose previous value is 0 are skipped.
pub fn volatility(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let returns: Vec<f64> = values
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();

    if returns.is_empty() {
        return 0.0;
    }

    let count = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / count;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / count;
    variance.sqrt()
}

/// Simplified growth rate: `(last - first) / first / len`
///
/// This is not a compounding rate; downstream driver text and scenario
/// multipliers depend on this exact formula.
pub fn growth_rate(values: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return 0.0;
    };
    if values.len() < 2 || first == 0.0 {
        return 0.0;
    }
    (last - first) / first / values.len() as f64
}
