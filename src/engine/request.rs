//! Validated compounding requests

use crate::calendar::DateCursor;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// A complete, validated request: a positive amount and two calendar months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundingRequest {
    amount: f64,
    from: DateCursor,
    to: DateCursor,
}

impl CompoundingRequest {
    /// Refuses amounts that are not finite and strictly positive
    pub fn new(amount: f64, from: DateCursor, to: DateCursor) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CalcError::InvalidAmount(amount));
        }
        Ok(Self { amount, from, to })
    }

    /// Build from the five raw inputs a form collects
    pub fn from_parts(
        amount: f64,
        from_year: i32,
        from_month: u32,
        to_year: i32,
        to_month: u32,
    ) -> Result<Self> {
        let from = DateCursor::new(from_year, from_month)?;
        let to = DateCursor::new(to_year, to_month)?;
        Self::new(amount, from, to)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn from(&self) -> DateCursor {
        self.from
    }

    pub fn to(&self) -> DateCursor {
        self.to
    }

    /// True when `to` is not strictly after `from`
    pub fn is_degenerate(&self) -> bool {
        self.from >= self.to
    }

    /// Calendar months walked, 0 for a degenerate range
    pub fn span_months(&self) -> u32 {
        self.from.months_until(self.to)
    }
}

/// Partially filled request, as collected from user input
///
/// Any missing field means there is nothing to compute yet; that is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDraft {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub from_year: Option<i32>,
    #[serde(default)]
    pub from_month: Option<u32>,
    #[serde(default)]
    pub to_year: Option<i32>,
    #[serde(default)]
    pub to_month: Option<u32>,
}

impl RequestDraft {
    /// `None` while incomplete, otherwise the validated request or the refusal
    pub fn complete(&self) -> Option<Result<CompoundingRequest>> {
        let amount = self.amount?;
        let from_year = self.from_year?;
        let from_month = self.from_month?;
        let to_year = self.to_year?;
        let to_month = self.to_month?;
        Some(CompoundingRequest::from_parts(
            amount, from_year, from_month, to_year, to_month,
        ))
    }
}
