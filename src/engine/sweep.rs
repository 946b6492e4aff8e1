//! Equivalent values from every observed month to one target month

use super::{CompoundingRequest, CompoundingResult};
use crate::calendar::DateCursor;
use crate::error::{CalcError, Result};
use crate::rates::RateTable;
use log::debug;
use rayon::prelude::*;

/// For each observed month strictly before `to`, what `amount` from that month is worth at `to`
///
/// Results come back in chronological order of the starting month.
pub fn sweep(
    table: &RateTable,
    amount: f64,
    to: DateCursor,
) -> Result<Vec<(DateCursor, CompoundingResult)>> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CalcError::InvalidAmount(amount));
    }

    let starts: Vec<DateCursor> = table
        .observations()
        .map(|(cursor, _)| cursor)
        .take_while(|cursor| *cursor < to)
        .collect();
    debug!("Sweeping {} starting months into {}", starts.len(), to);

    starts
        .par_iter()
        .map(|&from| -> Result<(DateCursor, CompoundingResult)> {
            let request = CompoundingRequest::new(amount, from, to)?;
            Ok((from, request.compound(table)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_equivalent_value;

    #[test]
    fn test_sweep_matches_single_requests() {
        let table = RateTable::argentina();
        let to = DateCursor::new(2018, 1).unwrap();
        let rows = sweep(&table, 100.0, to).unwrap();

        // Every month of 2017
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].0, DateCursor::new(2017, 1).unwrap());
        assert_eq!(rows[11].0, DateCursor::new(2017, 12).unwrap());

        for (from, result) in &rows {
            let (year, month) = (from.year(), from.month());
            let single = compute_equivalent_value(&table, 100.0, year, month, 2018, 1).unwrap();
            assert_eq!(*result, single);
        }

        // Earlier starts have compounded over more months
        assert!(rows[0].1.final_amount > rows[11].1.final_amount);
        assert_eq!(rows[11].1.months_applied, 1);
    }

    #[test]
    fn test_sweep_before_table_is_empty() {
        let table = RateTable::argentina();
        let rows = sweep(&table, 100.0, DateCursor::new(2017, 1).unwrap()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sweep_refuses_invalid_amount() {
        let table = RateTable::argentina();
        let result = sweep(&table, 0.0, DateCursor::new(2020, 1).unwrap());
        assert!(matches!(result, Err(CalcError::InvalidAmount(_))));
    }
}
