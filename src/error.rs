//! Error types for the calculator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// Amount must be a finite number greater than zero
    #[error("invalid amount {0}: must be a positive number")]
    InvalidAmount(f64),

    #[error("invalid year {0}: must be between 1000 and 9999")]
    InvalidYear(i32),

    #[error("invalid month {0}: must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("invalid date '{0}': expected YYYY-MM")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Rate tables may hold at most one observation per (year, month)
    #[error("duplicate rate for {year}-{month:02}")]
    DuplicateRate { year: i32, month: u32 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
