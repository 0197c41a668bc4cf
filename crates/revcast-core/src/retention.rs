//! Client retention estimate
//!
//! Revenue points only carry an optional client identifier, not a billing
//! history per client, so the estimate is a fixed heuristic: a baseline rate
//! when clients are known and a lower default when none are.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::TimePoint;

/// Rate reported when the series identifies at least one client
pub const BASELINE_RETENTION: f64 = 0.85;
/// Rate reported when no client identifiers are present
pub const UNKNOWN_RETENTION: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetentionTrend {
    Stable,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRetention {
    /// Fraction in [0, 1]
    pub rate: f64,
    /// Distinct non-empty client identifiers
    pub total_clients: usize,
    pub trend: RetentionTrend,
}

pub fn estimate_retention(series: &[TimePoint]) -> ClientRetention {
    let clients: HashSet<&str> = series
        .iter()
        .filter_map(|p| p.client_id.as_deref())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if clients.is_empty() {
        return ClientRetention {
            rate: UNKNOWN_RETENTION,
            total_clients: 0,
            trend: RetentionTrend::Unknown,
        };
    }

    ClientRetention {
        rate: BASELINE_RETENTION,
        total_clients: clients.len(),
        trend: RetentionTrend::Stable,
    }
}
