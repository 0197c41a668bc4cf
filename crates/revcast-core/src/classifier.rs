//! Keyword-based expense category suggestion
//!
//! Descriptions are lower-cased and checked against an ordered rule table.
//! Keywords match as plain substrings, so "train" also matches "training".
//! The highest-confidence rule wins; on equal scores the earlier rule is kept.

use tracing::debug;

use crate::models::CategorySuggestion;

/// Category returned when no rule matches
pub const FALLBACK_CATEGORY: &str = "Miscellaneous";
/// Confidence of the fallback suggestion
pub const FALLBACK_CONFIDENCE: u8 = 50;

/// Confidence added per matched keyword, capped at the rule's base
const MATCH_BONUS: u32 = 5;

/// One (keywords, category, base confidence) rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub category: String,
    pub confidence: u8,
}

impl CategoryRule {
    pub fn new(keywords: &[&str], category: impl Into<String>, confidence: u8) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category: category.into(),
            confidence,
        }
    }

    /// Number of keywords found in an already lower-cased description
    fn match_count(&self, description: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| description.contains(k.as_str()))
            .count()
    }
}

/// The built-in rule table, in evaluation order
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            &["uber", "ola", "cab", "taxi", "fuel", "petrol", "diesel", "metro", "train", "bus"],
            "Transport",
            95,
        ),
        CategoryRule::new(
            &["hotel", "airbnb", "flight", "airlines", "travel", "trip", "booking", "reservation"],
            "Travel",
            92,
        ),
        CategoryRule::new(
            &[
                "food",
                "restaurant",
                "dinner",
                "lunch",
                "cafe",
                "pizza",
                "swiggy",
                "zomato",
                "delivery",
            ],
            "Dining",
            90,
        ),
        CategoryRule::new(
            &["grocery", "supermarket", "mart", "bigbasket", "grofers"],
            "Groceries",
            88,
        ),
        CategoryRule::new(
            &["aws", "azure", "gcp", "server", "hosting", "domain", "cloud", "saas"],
            "Cloud & Hosting",
            85,
        ),
        CategoryRule::new(
            &["internet", "wifi", "broadband", "mobile", "phone", "telecom"],
            "Utilities",
            83,
        ),
        CategoryRule::new(
            &["laptop", "mouse", "keyboard", "monitor", "computer", "hardware"],
            "Equipment",
            80,
        ),
        CategoryRule::new(
            &["doctor", "pharmacy", "hospital", "medicine", "healthcare"],
            "Health",
            78,
        ),
        CategoryRule::new(
            &["rent", "lease", "office", "property", "real estate"],
            "Rent",
            75,
        ),
        CategoryRule::new(
            &["marketing", "advertising", "google ads", "facebook ads", "social media"],
            "Marketing",
            70,
        ),
        CategoryRule::new(
            &["software", "license", "subscription", "saas", "app"],
            "Software",
            65,
        ),
        CategoryRule::new(
            &["training", "course", "education", "workshop", "seminar"],
            "Training",
            60,
        ),
    ]
}

/// Classifier over an ordered rule table
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    /// Create a classifier with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a classifier with a custom rule table
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn classify(&self, description: &str) -> CategorySuggestion {
        let text = description.to_lowercase();

        let mut best = CategorySuggestion {
            category: FALLBACK_CATEGORY.to_string(),
            confidence: FALLBACK_CONFIDENCE,
        };

        for rule in &self.rules {
            let matches = rule.match_count(&text);
            if matches == 0 {
                continue;
            }

            let base = rule.confidence as u32;
            let confidence = (base + MATCH_BONUS * matches as u32).min(base) as u8;
            if confidence > best.confidence {
                best = CategorySuggestion {
                    category: rule.category.clone(),
                    confidence,
                };
            }
        }

        debug!(
            category = %best.category,
            confidence = best.confidence,
            "Category suggested"
        );
        best
    }
}

/// Classify with the built-in rules
pub fn suggest_category(description: &str) -> CategorySuggestion {
    CategoryClassifier::new().classify(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uber_is_transport() {
        let suggestion = suggest_category("Uber ride to airport");
        assert_eq!(suggestion.category, "Transport");
        assert!(suggestion.confidence >= 95);
    }

    #[test]
    fn test_empty_and_whitespace_fall_back() {
        for text in ["", "   ", "\t\n"] {
            let suggestion = suggest_category(text);
            assert_eq!(suggestion.category, FALLBACK_CATEGORY);
            assert_eq!(suggestion.confidence, 50);
        }
    }

    #[test]
    fn test_unknown_text_falls_back() {
        let suggestion = suggest_category("Quarterly stationery order");
        assert_eq!(suggestion.category, "Miscellaneous");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(suggest_category("AWS MONTHLY BILL").category, "Cloud & Hosting");
        assert_eq!(suggest_category("Pharmacy").category, "Health");
    }

    #[test]
    fn test_higher_base_wins_over_more_matches() {
        // Software matches twice, Cloud & Hosting once, but Cloud's base is higher
        let suggestion = suggest_category("software license for cloud");
        assert_eq!(suggestion.category, "Cloud & Hosting");
        assert_eq!(suggestion.confidence, 85);
    }

    #[test]
    fn test_substring_matching() {
        // "training" contains "train"
        assert_eq!(suggest_category("Sales training").category, "Transport");
        assert_eq!(suggest_category("Online course fee").category, "Training");
    }

    #[test]
    fn test_ties_keep_first_rule() {
        let classifier = CategoryClassifier::with_rules(vec![
            CategoryRule::new(&["desk"], "First", 70),
            CategoryRule::new(&["desk"], "Second", 70),
        ]);
        assert_eq!(classifier.classify("standing desk").category, "First");
    }

    #[test]
    fn test_rule_table_order() {
        let rules = default_rules();
        assert_eq!(rules.len(), 12);
        assert_eq!(rules[0].category, "Transport");
        assert_eq!(rules[11].category, "Training");
        assert!(rules.windows(2).all(|w| w[0].confidence > w[1].confidence));
    }
}
