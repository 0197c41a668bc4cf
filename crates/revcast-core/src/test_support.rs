//! Shared helpers for unit tests

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::TimePoint;

/// One point per month starting 2024-01-15
pub fn monthly_series(values: &[f64]) -> Vec<TimePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &amount)| {
            let date = start.checked_add_months(Months::new(i as u32)).unwrap();
            TimePoint::new(amount, date)
        })
        .collect()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
