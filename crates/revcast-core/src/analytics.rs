//! Revenue analytics and dashboard KPIs

use std::collections::BTreeMap;

use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::models::{Expense, TimePoint};

/// Category used for revenue points without one
pub const DEFAULT_REVENUE_CATEGORY: &str = "General";
/// Source used for revenue points without one
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Trailing window for revenue analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[default]
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl AnalyticsPeriod {
    pub fn months(&self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::TwelveMonths => "12months",
        }
    }
}

impl std::str::FromStr for AnalyticsPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            "12months" => Ok(Self::TwelveMonths),
            _ => Err(format!(
                "Unknown period: {}. Available: 3months, 6months, 12months",
                s
            )),
        }
    }
}

impl std::fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueAnalytics {
    pub total: f64,
    pub average: f64,
    /// First-to-last change in percent
    pub growth_percent: f64,
    pub by_category: BTreeMap<String, f64>,
    pub by_source: BTreeMap<String, f64>,
    pub data_points: usize,
    pub period: AnalyticsPeriod,
}

/// Points dated within `period` months of the latest point
pub fn within_period(series: &[TimePoint], period: AnalyticsPeriod) -> Vec<TimePoint> {
    let Some(latest) = series.iter().map(|p| p.date).max() else {
        return Vec::new();
    };
    match latest.checked_sub_months(Months::new(period.months())) {
        Some(cutoff) => series.iter().filter(|p| p.date > cutoff).cloned().collect(),
        None => series.to_vec(),
    }
}

fn sum_by<'a>(
    series: &'a [TimePoint],
    key: impl Fn(&'a TimePoint) -> Option<&'a str>,
    fallback: &str,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for point in series {
        let name = key(point)
            .filter(|k| !k.is_empty())
            .unwrap_or(fallback);
        *totals.entry(name.to_string()).or_insert(0.0) += point.amount;
    }
    totals
}

pub fn revenue_analytics(series: &[TimePoint], period: AnalyticsPeriod) -> RevenueAnalytics {
    let window = within_period(series, period);
    let total: f64 = window.iter().map(|p| p.amount).sum();
    let average = if window.is_empty() {
        0.0
    } else {
        total / window.len() as f64
    };

    let growth_percent = match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() > 1 && first.amount != 0.0 => {
            (last.amount - first.amount) / first.amount * 100.0
        }
        _ => 0.0,
    };

    RevenueAnalytics {
        total,
        average,
        growth_percent,
        by_category: sum_by(&window, |p| p.category.as_deref(), DEFAULT_REVENUE_CATEGORY),
        by_source: sum_by(&window, |p| p.source.as_deref(), UNKNOWN_SOURCE),
        data_points: window.len(),
        period,
    }
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_revenue: f64,
    /// Total revenue spread over twelve months
    pub avg_monthly_revenue: f64,
    /// Last point against the one before it, in percent
    pub month_over_month_growth: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

pub fn dashboard_kpis(revenue: &[TimePoint], expenses: &[Expense]) -> DashboardKpis {
    let total_revenue: f64 = revenue.iter().map(|p| p.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

    let last = revenue.last().map(|p| p.amount).unwrap_or(0.0);
    let previous = revenue
        .len()
        .checked_sub(2)
        .and_then(|i| revenue.get(i))
        .map(|p| p.amount)
        .unwrap_or(0.0);
    let month_over_month_growth = if previous > 0.0 {
        (last - previous) / previous * 100.0
    } else {
        0.0
    };

    DashboardKpis {
        total_revenue,
        avg_monthly_revenue: total_revenue / 12.0,
        month_over_month_growth,
        total_expenses,
        net_profit: total_revenue - total_expenses,
    }
}
