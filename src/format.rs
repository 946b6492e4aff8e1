//! Display formatting for results
//!
//! Amounts follow the Argentine convention: `.` groups thousands and `,`
//! separates two decimal places, e.g. `$ 1.234.567,89`.

use crate::calendar::DateCursor;
use crate::engine::CompoundingResult;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Format an amount as pesos with the default symbol
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, DEFAULT_CURRENCY_SYMBOL)
}

/// Format an amount with two decimals, `.` thousands and `,` decimal separator
pub fn format_currency_with(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{} -", symbol);
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to 0,00 and should not keep its sign
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{} {},{}", sign, symbol, grouped, frac_part)
}

/// Percentage with two decimals, e.g. `6.32%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// One-line explanation of a result
pub fn purchasing_power_sentence(
    amount: f64,
    from: DateCursor,
    to: DateCursor,
    result: &CompoundingResult,
    symbol: &str,
) -> String {
    format!(
        "Your {} from {} would need to be {} in {} to maintain the same purchasing power.",
        format_currency_with(amount, symbol),
        from.label(),
        format_currency_with(result.final_amount, symbol),
        to.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$ 0,00");
        assert_eq!(format_currency(106.32448), "$ 106,32");
        assert_eq!(format_currency(1234.5), "$ 1.234,50");
        assert_eq!(format_currency(1_234_567.891), "$ 1.234.567,89");
        assert_eq!(format_currency(999.999), "$ 1.000,00");
        assert_eq!(format_currency(-50.0), "-$ 50,00");
        assert_eq!(format_currency(-0.001), "$ 0,00");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(format_currency_with(100000.0, "ARS"), "ARS 100.000,00");
        assert_eq!(format_currency_with(f64::NAN, "$"), "$ -");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(6.32448), "6.32%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(-1.005), "-1.00%");
    }

    #[test]
    fn test_sentence() {
        let from = DateCursor::new(2017, 1).unwrap();
        let to = DateCursor::new(2017, 4).unwrap();
        let result = CompoundingResult {
            final_amount: 106.32448,
            total_change_percent: 6.32448,
            months_applied: 3,
        };
        assert_eq!(
            purchasing_power_sentence(100.0, from, to, &result, "$"),
            "Your $ 100,00 from January 2017 would need to be $ 106,32 in April 2017 \
             to maintain the same purchasing power."
        );
    }
}
