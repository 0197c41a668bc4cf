//! Loading revenue and expense data from JSON or CSV files
//!
//! JSON files hold an array of records; CSV files use the field names as
//! headers (`amount,date,category,source,status,client_id` for revenue and
//! `amount,category,description,vendor` for expenses). Revenue points are
//! stably sorted by date, since the analyzer relies on chronological order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{Expense, TimePoint};
use crate::sample;

/// File stem of the revenue data file inside a data directory
pub const REVENUE_FILE: &str = "revenue";
/// File stem of the expense data file inside a data directory
pub const EXPENSES_FILE: &str = "expenses";

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::InvalidData(format!(
                "Unsupported data file (expected .json or .csv): {}",
                path.display()
            ))),
        }
    }
}

fn parse_records<T: DeserializeOwned, R: Read>(reader: R, format: DataFormat) -> Result<Vec<T>> {
    match format {
        DataFormat::Json => Ok(serde_json::from_reader(reader)?),
        DataFormat::Csv => {
            let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
            let mut records = Vec::new();
            for record in csv_reader.deserialize() {
                records.push(record?);
            }
            Ok(records)
        }
    }
}

fn check_amount(amount: f64, row: usize) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidData(format!(
            "Record {}: amount must be a non-negative number, got {}",
            row + 1,
            amount
        )));
    }
    Ok(())
}

/// Parse revenue points and sort them chronologically
pub fn parse_series<R: Read>(reader: R, format: DataFormat) -> Result<Vec<TimePoint>> {
    let mut series: Vec<TimePoint> = parse_records(reader, format)?;
    for (row, point) in series.iter().enumerate() {
        check_amount(point.amount, row)?;
    }
    series.sort_by_key(|p| p.date);
    Ok(series)
}

pub fn parse_expenses<R: Read>(reader: R, format: DataFormat) -> Result<Vec<Expense>> {
    let expenses: Vec<Expense> = parse_records(reader, format)?;
    for (row, expense) in expenses.iter().enumerate() {
        check_amount(expense.amount, row)?;
    }
    Ok(expenses)
}

pub fn load_series(path: &Path) -> Result<Vec<TimePoint>> {
    let format = DataFormat::from_path(path)?;
    let series = parse_series(BufReader::new(File::open(path)?), format)?;
    debug!(path = %path.display(), points = series.len(), "Loaded revenue series");
    Ok(series)
}

pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    let format = DataFormat::from_path(path)?;
    let expenses = parse_expenses(BufReader::new(File::open(path)?), format)?;
    debug!(path = %path.display(), count = expenses.len(), "Loaded expenses");
    Ok(expenses)
}

/// First existing `<stem>.json` or `<stem>.csv` in a directory
pub fn find_data_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    ["json", "csv"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.exists())
}

/// Revenue and expenses from one data directory
#[derive(Debug, Clone)]
pub struct DataSet {
    pub revenue: Vec<TimePoint>,
    pub expenses: Vec<Expense>,
    /// Human-readable origin, reported in the model status
    pub source: String,
}

impl DataSet {
    /// The built-in sample data set
    pub fn sample() -> Self {
        Self {
            revenue: sample::default_revenue(),
            expenses: sample::default_expenses(),
            source: "built-in sample data".to_string(),
        }
    }

    /// Load a data directory
    ///
    /// When either file is missing the whole sample data set is used, so
    /// revenue and expenses always come from the same origin.
    pub fn load(dir: &Path) -> Result<Self> {
        let (Some(revenue_path), Some(expenses_path)) = (
            find_data_file(dir, REVENUE_FILE),
            find_data_file(dir, EXPENSES_FILE),
        ) else {
            warn!(
                dir = %dir.display(),
                "Data files not found, using built-in sample data"
            );
            return Ok(Self::sample());
        };

        let data = Self {
            revenue: load_series(&revenue_path)?,
            expenses: load_expenses(&expenses_path)?,
            source: dir.display().to_string(),
        };
        info!(
            dir = %dir.display(),
            revenue = data.revenue.len(),
            expenses = data.expenses.len(),
            "Loaded data set"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("a/revenue.JSON")).unwrap(), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("x.csv")).unwrap(), DataFormat::Csv);
        assert!(DataFormat::from_path(Path::new("x.xlsx")).is_err());
        assert!(DataFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_parse_json_series_sorts_by_date() {
        let json = r#"[
            {"amount": 300, "date": "2024-03-01"},
            {"amount": 100, "date": "2024-01-01", "source": "Client A"},
            {"amount": 200, "date": "2024-02-01", "client_id": "c-1"}
        ]"#;
        let series = parse_series(json.as_bytes(), DataFormat::Json).unwrap();

        let amounts: Vec<f64> = series.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![100.0, 200.0, 300.0]);
        assert_eq!(series[0].source.as_deref(), Some("Client A"));
        assert_eq!(series[1].client_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_parse_csv_series() {
        let csv = "amount,date,category,source,status,client_id\n\
                   350000,2024-01-15,Recurring,Client A,Confirmed,\n\
                   420000,2024-01-20,,Product Sales,Confirmed,p-9\n";
        let series = parse_series(csv.as_bytes(), DataFormat::Csv).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].category.as_deref(), Some("Recurring"));
        assert!(series[0].client_id.is_none());
        assert!(series[1].category.is_none());
        assert_eq!(series[1].client_id.as_deref(), Some("p-9"));
    }

    #[test]
    fn test_parse_csv_minimal_columns() {
        let csv = "date,amount\n2024-01-15,10\n2024-02-15,20\n";
        let series = parse_series(csv.as_bytes(), DataFormat::Csv).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].amount, 20.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let json = r#"[{"amount": -5, "date": "2024-01-01"}]"#;
        let err = parse_series(json.as_bytes(), DataFormat::Json).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        let csv = "amount,category\n-1,Rent\n";
        assert!(parse_expenses(csv.as_bytes(), DataFormat::Csv).is_err());
    }

    #[test]
    fn test_bad_date_is_error() {
        let json = r#"[{"amount": 5, "date": "March 1st"}]"#;
        assert!(matches!(
            parse_series(json.as_bytes(), DataFormat::Json),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_data_set_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("revenue.json"), "[]").unwrap();

        // Expenses missing: whole sample set is used
        let data = DataSet::load(dir.path()).unwrap();
        assert_eq!(data.revenue.len(), 12);
        assert_eq!(data.source, "built-in sample data");
    }

    #[test]
    fn test_data_set_loads_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("revenue.csv"),
            "amount,date\n10,2024-02-01\n5,2024-01-01\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("expenses.json"),
            r#"[{"amount": 40, "category": "Rent", "description": "Office"}]"#,
        )
        .unwrap();

        let data = DataSet::load(dir.path()).unwrap();
        assert_eq!(data.revenue.len(), 2);
        assert_eq!(data.revenue[0].amount, 5.0);
        assert_eq!(data.expenses[0].description.as_deref(), Some("Office"));
        assert_eq!(data.source, dir.path().display().to_string());
    }

    #[test]
    fn test_json_preferred_over_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("revenue.json"), "[]").unwrap();
        fs::write(dir.path().join("revenue.csv"), "amount,date\n").unwrap();
        assert_eq!(
            find_data_file(dir.path(), REVENUE_FILE).unwrap(),
            dir.path().join("revenue.json")
        );
    }
}
