//! Sparse (year, month) -> monthly rate lookup

use crate::calendar::{DateCursor, YEAR_RANGE};
use crate::error::{CalcError, Result};
use std::collections::BTreeMap;

/// Monthly inflation rates keyed by year, then month
///
/// Rates are percentages: `6.5` means prices rose 6.5% during that month.
/// A month with no key has no observation, which is not the same as a 0% month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    years: BTreeMap<i32, BTreeMap<u32, f64>>,
}

impl RateTable {
    /// Build a table from `(year, month, rate)` observations
    ///
    /// Fails on years outside `YEAR_RANGE`, months outside 1..=12 or on a
    /// repeated (year, month) key.
    pub fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, u32, f64)>,
    {
        let mut years: BTreeMap<i32, BTreeMap<u32, f64>> = BTreeMap::new();
        for (year, month, rate) in observations {
            if !YEAR_RANGE.contains(&year) {
                return Err(CalcError::InvalidYear(year));
            }
            if !(1..=12).contains(&month) {
                return Err(CalcError::InvalidMonth(month));
            }
            let months = years.entry(year).or_default();
            if months.insert(month, rate).is_some() {
                return Err(CalcError::DuplicateRate { year, month });
            }
        }
        Ok(Self { years })
    }

    /// Table holding the bundled Argentina monthly inflation series
    pub fn argentina() -> Self {
        let years: BTreeMap<i32, BTreeMap<u32, f64>> = super::argentina::ARGENTINA_MONTHLY
            .iter()
            .map(|&(year, rates)| {
                let months: BTreeMap<u32, f64> = (1u32..).zip(rates.iter().copied()).collect();
                (year, months)
            })
            .collect();
        Self { years }
    }

    /// Rate observed for (year, month), if any
    /// Missing years and missing months inside a present year both report `None`
    pub fn rate(&self, year: i32, month: u32) -> Option<f64> {
        self.years.get(&year)?.get(&month).copied()
    }

    /// Rate observed at a cursor position
    pub fn rate_at(&self, cursor: DateCursor) -> Option<f64> {
        self.rate(cursor.year(), cursor.month())
    }

    /// Months of `year` that carry an observation, in calendar order
    ///
    /// An unknown year yields the full 1..=12 range: every month stays
    /// selectable and `rate` reports the absence later.
    pub fn available_months(&self, year: i32) -> Vec<u32> {
        match self.years.get(&year) {
            Some(months) => months.keys().copied().collect(),
            None => (1..=12).collect(),
        }
    }

    /// Years with at least one observation, ascending
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    /// Earliest observed month
    pub fn first(&self) -> Option<DateCursor> {
        let (&year, months) = self.years.iter().next()?;
        let (&month, _) = months.iter().next()?;
        DateCursor::new(year, month).ok()
    }

    /// Latest observed month
    pub fn last(&self) -> Option<DateCursor> {
        let (&year, months) = self.years.iter().next_back()?;
        let (&month, _) = months.iter().next_back()?;
        DateCursor::new(year, month).ok()
    }

    /// All observations in chronological order
    pub fn observations(&self) -> impl Iterator<Item = (DateCursor, f64)> + '_ {
        self.years.iter().flat_map(|(&year, months)| {
            months.iter().filter_map(move |(&month, &rate)| {
                DateCursor::new(year, month).ok().map(|cursor| (cursor, rate))
            })
        })
    }

    /// Number of observed months
    pub fn len(&self) -> usize {
        self.years.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
