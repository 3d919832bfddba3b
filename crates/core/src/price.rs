//! Display formatting for integer minor-unit prices.
//!
//! Totals are always computed in integer cents; formatting is the only
//! place a price is ever split into dollars and cents.

/// Format a cent amount as a US-dollar display string, e.g. `$1,850.00`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let dollars = cents / 100;
    let remainder = cents % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_cents(18500), "$185.00");
    }

    #[test]
    fn formats_sub_dollar() {
        assert_eq!(format_cents(243), "$2.43");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_cents(23_234_234), "$232,342.34");
        assert_eq!(format_cents(10_000_000), "$100,000.00");
    }

    #[test]
    fn formats_negative() {
        // Negative amounts never occur in cart totals, but the formatter
        // should not mangle them if one slips through.
        assert_eq!(format_cents(-18500), "-$185.00");
    }
}
