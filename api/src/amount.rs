//! Local validation of the amount field, done before any request is sent.

use thiserror::Error;

/// An error that can occur when validating a typed amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("Enter an amount to convert")]
    Empty,
    #[error("Invalid amount")]
    Invalid,
    #[error("Amount must be positive")]
    NotPositive,
}

/// Strips grouping commas and anything that is not a digit, `.` or `-`.
///
/// This mirrors what the conversion endpoint does with the raw string, so an
/// amount accepted here is accepted there too.
pub fn sanitize_amount(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parses a typed amount into a positive, finite number.
///
/// # Examples
/// ```
/// use api::amount::{parse_amount, AmountError};
/// assert_eq!(parse_amount("1,234.5"), Ok(1234.5));
/// assert_eq!(parse_amount("abc"), Err(AmountError::Invalid));
/// ```
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    if raw.trim().is_empty() {
        return Err(AmountError::Empty);
    }

    let value = sanitize_amount(raw)
        .parse::<f64>()
        .map_err(|_| AmountError::Invalid)?;

    if !value.is_finite() {
        return Err(AmountError::Invalid);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_grouped_and_decorated_numbers() {
        assert_eq!(parse_amount("1234"), Ok(1234.0));
        assert_eq!(parse_amount(" 1,234.50 "), Ok(1234.5));
        assert_eq!(parse_amount("$20"), Ok(20.0));
    }

    #[test]
    fn rejects_text() {
        assert_eq!(parse_amount("abc"), Err(AmountError::Invalid));
        assert_eq!(parse_amount("1.2.3"), Err(AmountError::Invalid));
        assert_eq!(parse_amount("."), Err(AmountError::Invalid));
    }

    #[test]
    fn rejects_blank_and_non_positive() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert_eq!(parse_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("-5"), Err(AmountError::NotPositive));
    }

    #[test]
    fn rejects_overflowing_input() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), Err(AmountError::Invalid));
    }
}
