//! Budget insights - category aggregation and threshold sentences
//!
//! Exactly one status sentence is emitted per report, chosen in order:
//! over the limit, above 80% of it, below 50% of it, otherwise steady.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::format_currency;
use crate::models::Expense;

/// Bucket for expenses without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Share of total spend above which a category counts as concentrated
const CONCENTRATION_SHARE: f64 = 0.3;
/// Number of categories listed in `top_categories`
const TOP_CATEGORY_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OverLimit,
    ApproachingLimit,
    WellBelow,
    Healthy,
}

impl BudgetStatus {
    pub fn classify(total: f64, limit: f64) -> Self {
        if total > limit {
            Self::OverLimit
        } else if total > limit * 0.8 {
            Self::ApproachingLimit
        } else if total < limit * 0.5 {
            Self::WellBelow
        } else {
            Self::Healthy
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            Self::OverLimit => "Budget exceeded; consider reducing discretionary spending.",
            Self::ApproachingLimit => "Approaching budget limit; monitor spending closely.",
            Self::WellBelow => "Well below budget; consider strategic investments.",
            Self::Healthy => "Spending within healthy range; keep tracking.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Share of total spend, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub total: f64,
    pub monthly_limit: f64,
    pub over_limit: bool,
    pub remaining_budget: f64,
    pub status: BudgetStatus,
    pub by_category: BTreeMap<String, f64>,
    pub top_category: Option<CategoryTotal>,
    /// Up to three categories by spend, highest first
    pub top_categories: Vec<CategoryTotal>,
    /// Categories above 30% of total spend, in first-seen order
    pub concentrated: Vec<String>,
    pub insights: Vec<String>,
    /// All insight sentences joined with a space
    pub summary: String,
}

/// Sum amounts per category, keeping first-seen order
fn aggregate(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut order: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for expense in expenses {
        let category = expense
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);

        match index.get(category) {
            Some(&i) => order[i].1 += expense.amount,
            None => {
                index.insert(category.to_string(), order.len());
                order.push((category.to_string(), expense.amount));
            }
        }
    }

    order
}

pub fn budget_insights(expenses: &[Expense], monthly_limit: f64, currency: &str) -> BudgetReport {
    let totals = aggregate(expenses);
    let total: f64 = totals.iter().map(|(_, amount)| amount).sum();

    let share = |amount: f64| {
        if total > 0.0 {
            amount / total * 100.0
        } else {
            0.0
        }
    };

    // Stable sort: equal amounts keep first-seen order
    let mut ranked = totals.clone();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let top_categories: Vec<CategoryTotal> = ranked
        .iter()
        .take(TOP_CATEGORY_COUNT)
        .map(|(category, amount)| CategoryTotal {
            category: category.clone(),
            amount: *amount,
            percentage: share(*amount),
        })
        .collect();
    let top_category = top_categories.first().cloned();

    let status = BudgetStatus::classify(total, monthly_limit);
    let concentrated: Vec<String> = totals
        .iter()
        .filter(|(_, amount)| *amount > total * CONCENTRATION_SHARE)
        .map(|(category, _)| category.clone())
        .collect();

    let mut insights = vec![format!("Total spent: {}.", format_currency(currency, total))];
    if let Some(top) = &top_category {
        insights.push(format!(
            "Highest spending in {} ({}).",
            top.category,
            format_currency(currency, top.amount)
        ));
    }
    insights.push(status.sentence().to_string());
    if !concentrated.is_empty() {
        insights.push(format!(
            "High concentration in {} - consider diversification.",
            concentrated.join(", ")
        ));
    }

    debug!(
        expenses = expenses.len(),
        categories = totals.len(),
        total,
        status = ?status,
        "Budget insights generated"
    );

    BudgetReport {
        total,
        monthly_limit,
        over_limit: status == BudgetStatus::OverLimit,
        remaining_budget: (monthly_limit - total).max(0.0),
        status,
        by_category: totals.into_iter().collect(),
        top_category,
        top_categories,
        concentrated,
        summary: insights.join(" "),
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_limit_single_rent() {
        let report = budget_insights(&[Expense::new(60_000.0, "Rent")], 50_000.0, "₹");

        assert!(report.over_limit);
        assert_eq!(report.total, 60_000.0);
        assert_eq!(report.status, BudgetStatus::OverLimit);
        assert_eq!(report.remaining_budget, 0.0);
        assert_eq!(
            report.insights,
            vec![
                "Total spent: ₹60,000.".to_string(),
                "Highest spending in Rent (₹60,000).".to_string(),
                "Budget exceeded; consider reducing discretionary spending.".to_string(),
                "High concentration in Rent - consider diversification.".to_string(),
            ]
        );
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(BudgetStatus::classify(45_000.0, 50_000.0), BudgetStatus::ApproachingLimit);
        assert_eq!(BudgetStatus::classify(40_000.0, 50_000.0), BudgetStatus::Healthy);
        assert_eq!(BudgetStatus::classify(25_000.0, 50_000.0), BudgetStatus::Healthy);
        assert_eq!(BudgetStatus::classify(24_999.0, 50_000.0), BudgetStatus::WellBelow);
        assert_eq!(BudgetStatus::classify(50_000.0, 50_000.0), BudgetStatus::ApproachingLimit);
        assert_eq!(BudgetStatus::classify(50_001.0, 50_000.0), BudgetStatus::OverLimit);
    }

    #[test]
    fn test_exactly_one_status_sentence() {
        let sentences: Vec<&str> = [
            BudgetStatus::OverLimit,
            BudgetStatus::ApproachingLimit,
            BudgetStatus::WellBelow,
            BudgetStatus::Healthy,
        ]
        .iter()
        .map(|s| s.sentence())
        .collect();

        for total in [0.0, 10_000.0, 30_000.0, 45_000.0, 70_000.0] {
            let report = budget_insights(&[Expense::new(total, "Misc")], 50_000.0, "₹");
            let count = report
                .insights
                .iter()
                .filter(|i| sentences.contains(&i.as_str()))
                .count();
            assert_eq!(count, 1, "total {}", total);
        }
    }

    #[test]
    fn test_empty_expenses() {
        let report = budget_insights(&[], 50_000.0, "₹");
        assert_eq!(report.total, 0.0);
        assert!(report.top_category.is_none());
        assert!(report.concentrated.is_empty());
        assert_eq!(
            report.insights,
            vec![
                "Total spent: ₹0.".to_string(),
                "Well below budget; consider strategic investments.".to_string(),
            ]
        );
        assert_eq!(report.remaining_budget, 50_000.0);
    }

    #[test]
    fn test_aggregation_and_concentration() {
        let expenses = vec![
            Expense::new(15_000.0, "Cloud & Hosting"),
            Expense::new(80_000.0, "Rent"),
            Expense::new(2_500.0, "Dining"),
            Expense::new(12_000.0, "Marketing"),
            Expense::new(8_000.0, "Software"),
            Expense::new(5_000.0, "Cloud & Hosting"),
        ];
        let report = budget_insights(&expenses, 50_000.0, "₹");

        assert_eq!(report.total, 122_500.0);
        assert_eq!(report.by_category["Cloud & Hosting"], 20_000.0);
        assert_eq!(report.by_category.len(), 5);

        let top: Vec<&str> = report
            .top_categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(top, vec!["Rent", "Cloud & Hosting", "Marketing"]);
        assert!((report.top_categories[0].percentage - 65.306).abs() < 0.01);
        assert_eq!(report.concentrated, vec!["Rent".to_string()]);
        assert!(report.summary.starts_with("Total spent: ₹1,22,500. Highest spending in Rent"));
    }

    #[test]
    fn test_uncategorized_bucket_and_ties() {
        let expenses = vec![
            Expense {
                amount: 100.0,
                category: None,
                description: None,
                vendor: None,
            },
            Expense::new(100.0, ""),
            Expense::new(200.0, "Travel"),
        ];
        let report = budget_insights(&expenses, 1_000.0, "$");

        assert_eq!(report.by_category[UNCATEGORIZED], 200.0);
        // Tie on 200: first-seen category wins
        assert_eq!(report.top_category.unwrap().category, UNCATEGORIZED);
        assert_eq!(
            report.concentrated,
            vec![UNCATEGORIZED.to_string(), "Travel".to_string()]
        );
        assert!(report
            .insights
            .contains(&"High concentration in Uncategorized, Travel - consider diversification.".to_string()));
    }

    #[test]
    fn test_category_names_are_not_normalized() {
        let expenses = vec![
            Expense::new(100.0, "Rent"),
            Expense::new(50.0, " Rent"),
            Expense::new(25.0, "  "),
        ];
        let report = budget_insights(&expenses, 1_000.0, "$");

        assert_eq!(report.by_category.len(), 3);
        assert_eq!(report.by_category["Rent"], 100.0);
        assert_eq!(report.by_category[" Rent"], 50.0);
        assert_eq!(report.by_category["  "], 25.0);
        assert!(!report.by_category.contains_key(UNCATEGORIZED));
    }
}
