//! Revenue analytics, dashboard and status commands

use anyhow::{anyhow, Result};
use revcast_core::AnalyticsPeriod;

use super::{print_json, Session};

pub fn cmd_analytics(session: &Session, period: &str) -> Result<()> {
    let period: AnalyticsPeriod = period.parse().map_err(|e: String| anyhow!(e))?;
    let analytics = session
        .engine
        .revenue_analytics(&session.data.revenue, period)?;

    if session.json {
        return print_json(&analytics);
    }

    println!();
    println!("📊 Revenue Analytics ({})", analytics.period);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total:    {}", session.money(analytics.total));
    println!("   Average:  {}", session.money(analytics.average));
    println!("   Growth:   {:+.1}%", analytics.growth_percent);
    println!("   Records:  {}", analytics.data_points);

    println!();
    println!("   By category:");
    for (category, amount) in &analytics.by_category {
        println!("     {:<20} {:>14}", category, session.money(*amount));
    }
    println!();
    println!("   By source:");
    for (source, amount) in &analytics.by_source {
        println!("     {:<20} {:>14}", source, session.money(*amount));
    }
    println!();

    Ok(())
}

pub fn cmd_dashboard(session: &mut Session) -> Result<()> {
    let dashboard = session
        .engine
        .dashboard(&session.data.revenue, &session.data.expenses)?;

    if session.json {
        return print_json(&dashboard);
    }

    let kpis = &dashboard.kpis;
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 Revcast Dashboard           │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total Revenue:     {}", session.money(kpis.total_revenue));
    println!("  Avg Monthly:       {}", session.money(kpis.avg_monthly_revenue));
    println!("  Month over Month:  {:+.1}%", kpis.month_over_month_growth);
    println!("  Total Expenses:    {}", session.money(kpis.total_expenses));
    println!("  Net Profit:        {}", session.money(kpis.net_profit));
    println!();

    if !dashboard.predictions.is_empty() {
        println!("  🔮 Next periods:");
        for prediction in &dashboard.predictions {
            println!(
                "     {}. {} ({}% confidence)",
                prediction.period,
                session.money(prediction.amount),
                prediction.confidence
            );
        }
        println!();
    }

    Ok(())
}

pub fn cmd_status(session: &Session, metrics: bool) -> Result<()> {
    session.engine.refresh_status();
    let report = session.engine.model_metrics();

    if session.json {
        return if metrics {
            print_json(&report)
        } else {
            print_json(&report.status)
        };
    }

    let status = &report.status;
    println!();
    println!("🧠 Model Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Version:     {}", status.version);
    println!("   Status:      {}", status.status);
    println!("   Accuracy:    {}", status.accuracy);
    println!("   Algorithms:  {}", status.algorithms.join(", "));
    println!("   Updated:     {}", status.last_update.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("   Data source: {}", status.data_source);
    println!(
        "   Records:     {} revenue, {} expenses",
        session.data.revenue.len(),
        session.data.expenses.len()
    );

    if metrics {
        let performance = &report.performance;
        let quality = &report.data_quality;
        println!();
        println!("   Performance:");
        println!(
            "     accuracy {}, precision {}, recall {}, F1 {}",
            performance.accuracy, performance.precision, performance.recall, performance.f1_score
        );
        println!("   Data quality:");
        println!(
            "     completeness {}, consistency {}, timeliness {}, validity {}",
            quality.completeness, quality.consistency, quality.timeliness, quality.validity
        );
    }
    println!();

    Ok(())
}
