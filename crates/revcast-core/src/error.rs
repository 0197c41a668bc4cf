//! Error types for revcast
//!
//! Insufficient or degenerate input is never an error here: the analysis and
//! forecasting functions degrade to `None`, empty, or default results instead.
//! Errors are reserved for invalid arguments at the engine boundary and for
//! loading data or configuration from disk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
