//! Analysis and forecast commands

use anyhow::Result;
use revcast_core::{Driver, ModelStatus, PeriodPrediction, Scenario};
use serde::Serialize;

use super::{print_json, Session};

/// Combined forecast output
#[derive(Serialize)]
pub struct ForecastReport {
    pub predictions: Vec<PeriodPrediction>,
    pub scenarios: Vec<Scenario>,
    pub key_drivers: Vec<Driver>,
    pub model_status: ModelStatus,
}

pub fn cmd_analyze(session: &Session) -> Result<()> {
    let analysis = session.engine.analyze_series(&session.data.revenue)?;

    if session.json {
        return print_json(&analysis);
    }

    let Some(analysis) = analysis else {
        println!(
            "Not enough revenue data to analyze ({} points, need at least {}).",
            session.data.revenue.len(),
            revcast_core::analysis::MIN_ANALYSIS_POINTS
        );
        return Ok(());
    };

    println!();
    println!("📈 Revenue Analysis ({} points)", analysis.data_points);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Trend:       slope {:.2}, intercept {:.2}, R² {:.3}",
        analysis.trend.slope, analysis.trend.intercept, analysis.trend.r_squared
    );
    println!("   Volatility:  {:.3}", analysis.volatility);
    println!("   Growth rate: {:.2}%", analysis.growth_rate * 100.0);
    println!("   Last value:  {}", session.money(analysis.last_value));

    match analysis.seasonality {
        Some(season) => {
            println!();
            println!("   Seasonal deviation by position:");
            for (i, deviation) in season.iter().enumerate() {
                println!("     {:>2}  {:>14}", i + 1, session.money(*deviation));
            }
        }
        None => println!("   Seasonality: (needs 12+ points)"),
    }

    if let Some(latest) = analysis.moving_averages.ma3.last() {
        println!();
        println!("   3-period moving average: {}", session.money(*latest));
    }
    if let Some(latest) = analysis.moving_averages.ma7.last() {
        println!("   7-period moving average: {}", session.money(*latest));
    }
    println!();

    Ok(())
}

pub fn cmd_forecast(session: &mut Session, horizon: Option<usize>) -> Result<()> {
    let forecast_config = &session.engine.config().forecast;
    let horizon =
        forecast_config.clamp_horizon(horizon.unwrap_or(forecast_config.default_horizon));

    let revenue = &session.data.revenue;
    let report = ForecastReport {
        predictions: session.engine.ensemble_forecast(revenue, horizon)?,
        scenarios: session.engine.generate_scenarios(revenue)?,
        key_drivers: session.engine.identify_key_drivers(revenue, None)?,
        model_status: session.engine.model_status(),
    };

    if session.json {
        return print_json(&report);
    }

    println!();
    println!("🔮 Revenue Forecast ({} periods)", horizon);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>6}  {:>14}  {:>10}  {:>8}",
        "Period", "Amount", "Confidence", "Change"
    );
    for prediction in &report.predictions {
        println!(
            "   {:>6}  {:>14}  {:>9}%  {:>8}",
            prediction.period,
            session.money(prediction.amount),
            prediction.confidence,
            prediction.change
        );
    }

    println!();
    println!("🎯 Scenarios");
    for scenario in &report.scenarios {
        println!(
            "   {:<12} {:>14}  ({}%)  {}",
            scenario.tier.title(),
            session.money(scenario.amount),
            scenario.probability,
            scenario.description
        );
    }

    println!();
    println!("🔑 Key Drivers");
    for driver in &report.key_drivers {
        println!(
            "   {} [impact {}, confidence {}]",
            driver.factor, driver.impact, driver.confidence
        );
        println!("      {}", driver.description);
    }

    println!();
    println!(
        "   Model {} ({}), data: {}",
        report.model_status.version, report.model_status.status, report.model_status.data_source
    );
    println!();

    Ok(())
}
