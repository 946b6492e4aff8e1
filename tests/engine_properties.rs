//! Engine behaviour across the bundled dataset

use approx::assert_relative_eq;
use inflation_calculator::{
    compute_equivalent_value, compute_timeline, default_table, CalcError, CompoundingRequest,
    DateCursor, RateTable,
};

fn all_months(table: &RateTable) -> Vec<DateCursor> {
    let first = table.first().unwrap();
    let last = table.last().unwrap().next();
    let mut cursors = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        cursors.push(cursor);
        cursor = cursor.next();
    }
    cursors
}

#[test]
fn reversed_ranges_leave_amount_unchanged() {
    let table = default_table();
    let months = all_months(table);

    for (i, &to) in months.iter().enumerate().step_by(7) {
        for &from in months[i..].iter().step_by(5) {
            let request = CompoundingRequest::new(321.0, from, to).unwrap();
            let result = request.compound(table);
            assert_eq!(result.final_amount, 321.0);
            assert_eq!(result.total_change_percent, 0.0);
            assert_eq!(result.months_applied, 0);
            assert!(request.timeline(table).is_empty());
        }
    }
}

#[test]
fn months_applied_counts_observed_months_only() {
    // 2025 ends in April, so a range into 2026 has a long unobserved tail
    let table = default_table();
    let result = compute_equivalent_value(table, 100.0, 2024, 11, 2026, 3).unwrap();

    // Nov, Dec 2024 and Jan-Apr 2025
    assert_eq!(result.months_applied, 6);

    let timeline = compute_timeline(table, 100.0, 2024, 11, 2026, 3).unwrap();
    assert_eq!(timeline.len(), 16 + 1);
}

#[test]
fn timeline_has_one_step_per_calendar_month() {
    let table = default_table();
    let months = all_months(table);

    for &from in months.iter().step_by(11) {
        for &to in months.iter().step_by(13).filter(|to| **to > from) {
            let request = CompoundingRequest::new(10.0, from, to).unwrap();
            let timeline = request.timeline(table);

            assert_eq!(timeline.len(), from.months_until(to) as usize + 1);
            assert_eq!(timeline.first().unwrap().cursor, from);
            assert_eq!(timeline.last().unwrap().cursor, to);
            for pair in timeline.steps().windows(2) {
                assert_eq!(pair[0].cursor.next(), pair[1].cursor);
            }
            assert_eq!(timeline.last().unwrap().amount, request.compound(table).final_amount);
        }
    }
}

#[test]
fn compounding_is_multiplicative_across_split_ranges() {
    let table = default_table();
    let whole = compute_equivalent_value(table, 100.0, 2018, 3, 2022, 9).unwrap();
    let first = compute_equivalent_value(table, 100.0, 2018, 3, 2020, 6).unwrap();
    let second =
        compute_equivalent_value(table, first.final_amount, 2020, 6, 2022, 9).unwrap();

    assert_relative_eq!(whole.final_amount, second.final_amount, max_relative = 1e-12);
    assert_eq!(whole.months_applied, first.months_applied + second.months_applied);
}

#[test]
fn concrete_scenarios() {
    let table = default_table();

    let q1 = compute_equivalent_value(table, 100.0, 2017, 1, 2017, 4).unwrap();
    assert_relative_eq!(q1.final_amount, 100.0 * 1.013 * 1.025 * 1.024, max_relative = 1e-12);
    assert_eq!(q1.months_applied, 3);

    let mid_2023 = compute_equivalent_value(table, 100.0, 2023, 7, 2023, 9).unwrap();
    assert_relative_eq!(mid_2023.final_amount, 119.4812, max_relative = 1e-9);
    assert_eq!(mid_2023.months_applied, 2);
}

#[test]
fn invalid_amounts_produce_no_result() {
    let table = default_table();
    for amount in [0.0, -50.0] {
        assert!(matches!(
            compute_equivalent_value(table, amount, 2017, 1, 2017, 4),
            Err(CalcError::InvalidAmount(_))
        ));
        assert!(matches!(
            compute_timeline(table, amount, 2017, 1, 2017, 4),
            Err(CalcError::InvalidAmount(_))
        ));
    }
}

#[test]
fn concurrent_callers_agree() {
    let table = default_table();
    let expected = compute_equivalent_value(table, 777.0, 2017, 6, 2025, 2).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                compute_equivalent_value(default_table(), 777.0, 2017, 6, 2025, 2).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.final_amount.to_bits(), expected.final_amount.to_bits());
    }
}
