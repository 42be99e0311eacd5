use chrono::NaiveDate;

/// Shown wherever a record's date could not be parsed.
pub const MISSING_DATE_LABEL: &str = "N/A";

/// Display classification of an amount's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountFlow {
    /// Money received or an adjustment (`amount >= 0`).
    Inflow,
    /// Money spent (`amount < 0`).
    Outflow,
}

/// Classify an amount for rendering. The same classification is used for the
/// amount cell accent and for the leading sign, so it lives in one place.
pub fn classify_amount(amount: f64) -> AmountFlow {
    if amount < 0.0 {
        AmountFlow::Outflow
    } else {
        AmountFlow::Inflow
    }
}

/// Fixed two-decimal dollar text. Non-finite input renders as the zero form
/// rather than leaking "NaN" into the page.
pub fn format_currency(amount: f64) -> String {
    let value = if amount.is_finite() { amount } else { 0.0 };
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

/// Parse a `YYYY-MM-DD` string as a plain calendar date.
///
/// No timezone is involved at any point, so the same string always names the
/// same day regardless of the viewer's local offset.
pub fn parse_expense_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Short month/day/year form, e.g. "Mar 1, 2023"; `"N/A"` for anything that
/// is not a valid calendar date.
pub fn format_date(value: &str) -> String {
    match parse_expense_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => MISSING_DATE_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(10.0), "$10.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
    }

    #[test]
    fn test_format_currency_negative_leads_with_sign() {
        assert_eq!(format_currency(-25.5), "-$25.50");
    }

    #[test]
    fn test_format_currency_non_finite_renders_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn test_format_date_short_form() {
        assert_eq!(format_date("2023-03-01"), "Mar 1, 2023");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
    }

    #[test]
    fn test_format_date_is_offset_independent() {
        // A calendar date parsed without any time component can never shift
        // across a day boundary, whatever the host timezone is.
        let date = parse_expense_date("2023-01-01").unwrap();
        assert_eq!((date.format("%Y-%m-%d")).to_string(), "2023-01-01");
        assert_eq!(format_date("2023-01-01"), "Jan 1, 2023");
    }

    #[test]
    fn test_format_date_malformed_renders_na() {
        for input in ["", "yesterday", "03/01/2023", "2023-13-01", "2023-02-30"] {
            assert_eq!(format_date(input), "N/A", "input: {input:?}");
        }
    }

    #[test]
    fn test_classify_amount() {
        assert_eq!(classify_amount(-25.5), AmountFlow::Outflow);
        assert_eq!(classify_amount(0.0), AmountFlow::Inflow);
        assert_eq!(classify_amount(10.0), AmountFlow::Inflow);
    }
}
