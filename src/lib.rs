//! Inflation Calculator - purchasing-power equivalents from monthly inflation rates
//!
//! This library provides:
//! - A sparse, read-only table of monthly inflation rates keyed by (year, month)
//! - Month-by-month compounding between two calendar months
//! - Per-month timelines for charting
//! - Currency and percentage formatting for presentation layers

pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod rates;

// Re-export commonly used types
pub use calendar::DateCursor;
pub use config::CalculatorConfig;
pub use engine::{
    compute_equivalent_value, compute_timeline, sweep, CompoundingRequest, CompoundingResult,
    RequestDraft, Timeline, TimelineStep,
};
pub use error::CalcError;
pub use rates::{default_table, RateTable};
