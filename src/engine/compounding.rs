//! Scalar equivalent-value computation

use super::{monthly_factor, CompoundingRequest};
use crate::error::Result;
use crate::rates::RateTable;
use log::debug;
use serde::Serialize;

/// Headline result of compounding an amount across a range of months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundingResult {
    /// Amount at the end month with the same purchasing power
    pub final_amount: f64,
    /// Total change over the range, in percent
    pub total_change_percent: f64,
    /// Months with an observed rate that were compounded
    pub months_applied: u32,
}

impl CompoundingResult {
    /// Zero-effect result returned for degenerate ranges
    pub fn unchanged(amount: f64) -> Self {
        Self {
            final_amount: amount,
            total_change_percent: 0.0,
            months_applied: 0,
        }
    }
}

impl CompoundingRequest {
    /// Compound the amount month by month from `from` (inclusive) to `to` (exclusive)
    ///
    /// Months without an observed rate are skipped: they neither change the
    /// amount nor count towards `months_applied`. Factors are applied in
    /// chronological order so results are reproducible to the bit.
    pub fn compound(&self, table: &RateTable) -> CompoundingResult {
        if self.is_degenerate() {
            debug!("Degenerate range {} -> {}, amount unchanged", self.from(), self.to());
            return CompoundingResult::unchanged(self.amount());
        }

        let mut cumulative = 1.0;
        let mut months_applied = 0u32;
        let mut cursor = self.from();

        while cursor < self.to() {
            match table.rate_at(cursor) {
                Some(rate) => {
                    cumulative *= monthly_factor(rate);
                    months_applied += 1;
                }
                None => debug!("No rate observed for {}, skipping", cursor),
            }
            cursor = cursor.next();
        }

        CompoundingResult {
            final_amount: self.amount() * cumulative,
            total_change_percent: (cumulative - 1.0) * 100.0,
            months_applied,
        }
    }
}

/// Equivalent value of `amount` at (from_year, from_month) expressed at (to_year, to_month)
///
/// Refuses invalid amounts and months; reversed ranges and data gaps are not errors.
pub fn compute_equivalent_value(
    table: &RateTable,
    amount: f64,
    from_year: i32,
    from_month: u32,
    to_year: i32,
    to_month: u32,
) -> Result<CompoundingResult> {
    let request = CompoundingRequest::from_parts(amount, from_year, from_month, to_year, to_month)?;
    Ok(request.compound(table))
}
