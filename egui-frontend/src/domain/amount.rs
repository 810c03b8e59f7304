//! # Amount Input Rules
//!
//! The amount field is a decimal-only input: it accepts digits and a single
//! decimal point, nothing else. Parsing happens when the form is confirmed.

use super::errors::FormError;

/// Strip everything a decimal keypad could not have typed.
///
/// Keeps ASCII digits and the first `.`; signs, letters, spaces and any
/// further decimal points are dropped.
pub fn filter_amount_input(input: &str) -> String {
    let mut seen_decimal_point = false;
    input
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_decimal_point => {
                seen_decimal_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parse the amount field text into currency units
pub fn parse_amount(input: &str) -> Result<f64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyAmount);
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(FormError::InvalidAmount(trimmed.to_string())),
    }
}

/// Text placed in the amount field when editing an existing expense.
///
/// Whole numbers keep one decimal place (`5000.0`), everything else uses the
/// shortest exact representation (`45.5`).
pub fn format_amount_for_input(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

/// Format amount for display, e.g. `R45.50`
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency_symbol, amount.abs())
    } else {
        format!("{}{:.2}", currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_amount_input() {
        assert_eq!(filter_amount_input("45.50"), "45.50");
        assert_eq!(filter_amount_input("abc"), "");
        assert_eq!(filter_amount_input("R 1,234.56"), "1234.56");
        assert_eq!(filter_amount_input("-5"), "5");
        assert_eq!(filter_amount_input("1.2.3"), "1.23");
        assert_eq!(filter_amount_input(""), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("45.50").unwrap(), 45.5);
        assert_eq!(parse_amount(" 10 ").unwrap(), 10.0);
        assert_eq!(parse_amount(".5").unwrap(), 0.5);
        assert_eq!(parse_amount("7.").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert_eq!(parse_amount(""), Err(FormError::EmptyAmount));
        assert_eq!(parse_amount("   "), Err(FormError::EmptyAmount));
        assert_eq!(parse_amount("abc"), Err(FormError::InvalidAmount("abc".to_string())));
        assert_eq!(parse_amount("."), Err(FormError::InvalidAmount(".".to_string())));
        assert!(matches!(parse_amount("inf"), Err(FormError::InvalidAmount(_))));
        assert!(matches!(parse_amount("NaN"), Err(FormError::InvalidAmount(_))));
    }

    #[test]
    fn test_format_amount_for_input() {
        assert_eq!(format_amount_for_input(45.5), "45.5");
        assert_eq!(format_amount_for_input(5000.0), "5000.0");
        assert_eq!(format_amount_for_input(0.25), "0.25");
    }

    #[test]
    fn test_prefilled_amount_parses_back() {
        for amount in [45.5, 5000.0, 0.01, 1234.56] {
            let text = format_amount_for_input(amount);
            assert_eq!(parse_amount(&text).unwrap(), amount);
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(45.5, "R"), "R45.50");
        assert_eq!(format_amount(-12.0, "R"), "-R12.00");
        assert_eq!(format_amount(3.0, "$"), "$3.00");
    }
}
