//! Expense categorization and budget commands

use anyhow::{bail, Result};
use revcast_core::suggest_category;

use super::{print_json, Session};

pub fn cmd_categorize(description: &str, json: bool) -> Result<()> {
    if description.trim().is_empty() {
        bail!("Description must not be empty");
    }

    let suggestion = suggest_category(description);
    if json {
        return print_json(&suggestion);
    }

    println!(
        "🏷️  {} ({}% confidence)",
        suggestion.category, suggestion.confidence
    );
    Ok(())
}

pub fn cmd_budget(session: &Session, limit: Option<f64>) -> Result<()> {
    let report = session
        .engine
        .budget_insights(&session.data.expenses, limit)?;

    if session.json {
        return print_json(&report);
    }

    println!();
    println!("💸 Budget Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total spent:   {}", session.money(report.total));
    println!("   Monthly limit: {}", session.money(report.monthly_limit));
    if report.over_limit {
        println!("   ⚠️  Over limit by {}", session.money(report.total - report.monthly_limit));
    } else {
        println!("   Remaining:     {}", session.money(report.remaining_budget));
    }

    if !report.top_categories.is_empty() {
        println!();
        println!("   Top categories:");
        for top in &report.top_categories {
            println!(
                "     {:<20} {:>14}  {:>5.1}%",
                top.category,
                session.money(top.amount),
                top.percentage
            );
        }
    }

    println!();
    for insight in &report.insights {
        println!("   • {}", insight);
    }
    println!();

    Ok(())
}
