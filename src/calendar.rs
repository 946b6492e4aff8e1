//! Month-precise calendar positions
//!
//! A `DateCursor` identifies a single calendar month. Cursors order by year
//! first and month second, which is the order the compounding walk follows.

use crate::error::{CalcError, Result};
use chrono::Month;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Years a cursor may hold: canonical four-digit values
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// A (year, month) position, year in `YEAR_RANGE`, month in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateCursor {
    year: i32,
    month: u32,
}

impl DateCursor {
    /// Create a cursor, rejecting years outside `YEAR_RANGE` and months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !YEAR_RANGE.contains(&year) {
            return Err(CalcError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(CalcError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month directly succeeding this one, December wrapping into January
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of calendar months from `self` to `end`
    /// Returns 0 when `end` is not after `self`
    pub fn months_until(&self, end: DateCursor) -> u32 {
        if end <= *self {
            return 0;
        }
        let years = end.year as i64 - self.year as i64;
        let months = years * 12 + end.month as i64 - self.month as i64;
        u32::try_from(months).unwrap_or(u32::MAX)
    }

    /// English month name, e.g. "January"
    pub fn month_name(&self) -> &'static str {
        // month is validated on construction
        Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// Long label used on chart tooltips, e.g. "January 2017"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for DateCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for DateCursor {
    type Err = CalcError;

    /// Parse `YYYY-MM` (the month may omit its leading zero)
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalcError::InvalidDate(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
