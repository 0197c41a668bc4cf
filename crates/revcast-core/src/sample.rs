//! Built-in sample data set, used when no data files are present

use chrono::NaiveDate;

use crate::models::{Expense, TimePoint};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Sample dates are valid")
}

/// Twelve confirmed revenue records, January through June 2024
pub fn default_revenue() -> Vec<TimePoint> {
    [
        (350_000.0, "Client A", "Recurring", (1, 15)),
        (420_000.0, "Product Sales", "One-time", (1, 20)),
        (380_000.0, "Client B", "Consulting", (2, 10)),
        (450_000.0, "Subscription", "Recurring", (2, 25)),
        (410_000.0, "Client C", "Service", (3, 5)),
        (480_000.0, "License Sales", "One-time", (3, 18)),
        (440_000.0, "Client A", "Recurring", (4, 12)),
        (520_000.0, "Product Sales", "One-time", (4, 28)),
        (470_000.0, "Client B", "Consulting", (5, 15)),
        (550_000.0, "Subscription", "Recurring", (5, 30)),
        (510_000.0, "Client C", "Service", (6, 10)),
        (580_000.0, "License Sales", "One-time", (6, 25)),
    ]
    .into_iter()
    .map(|(amount, source, category, (month, day))| {
        TimePoint::new(amount, date(2024, month, day))
            .with_source(source)
            .with_category(category)
            .with_status("Confirmed")
    })
    .collect()
}

pub fn default_expenses() -> Vec<Expense> {
    [
        ("AWS Cloud Services", 15_000.0, "Cloud & Hosting", "Amazon"),
        ("Office Rent", 80_000.0, "Rent", "Property Management"),
        ("Team Lunch", 2_500.0, "Dining", "Local Restaurant"),
        ("Marketing Tools", 12_000.0, "Marketing", "Marketing Platform"),
        ("Software Licenses", 8_000.0, "Software", "Software Company"),
    ]
    .into_iter()
    .map(|(description, amount, category, vendor)| {
        Expense::new(amount, category)
            .with_description(description)
            .with_vendor(vendor)
    })
    .collect()
}
