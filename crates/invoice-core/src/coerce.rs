//! # Input Coercion
//!
//! Turns raw field text into the values the document stores.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Field Edit Pipeline                                │
//! │                                                                         │
//! │  Presentation surface sends the raw text of the input box              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  parse_number("12.5kg")  ← THIS MODULE                                 │
//! │  ├── leading numeric prefix → Ok(12.5)                                 │
//! │  ├── no digits at all       → Err(InvalidNumber)                       │
//! │  └── overflow / "Infinity"  → Err(NonFinite)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  coerce_number() → Err(_) becomes 0.0                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stored value is ALWAYS a finite f64                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is lenient about trailing garbage the way browser number inputs
//! are: the longest numeric prefix wins.

use chrono::NaiveDate;
use tracing::trace;

use crate::error::ValidationError;

/// Result type for parse operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Storage encoding for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Numbers
// =============================================================================

/// Parses the leading decimal number in `raw`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Leading whitespace is skipped; anything after the
/// number is ignored.
///
/// ## Example
/// ```rust
/// use invoice_core::coerce::parse_number;
///
/// assert_eq!(parse_number("150").unwrap(), 150.0);
/// assert_eq!(parse_number(" 2.5 hours").unwrap(), 2.5);
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(raw: &str) -> ValidationResult<f64> {
    let text = raw.trim_start();
    let prefix = numeric_prefix(text);

    if prefix.is_empty() {
        return Err(ValidationError::InvalidNumber {
            value: raw.to_string(),
        });
    }

    let value: f64 = prefix.parse().map_err(|_| ValidationError::InvalidNumber {
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NonFinite {
            value: raw.to_string(),
        });
    }

    Ok(value)
}

/// Parses `raw` as a number, falling back to `0.0` on any failure.
///
/// ## Example
/// ```rust
/// use invoice_core::coerce::coerce_number;
///
/// assert_eq!(coerce_number("3"), 3.0);
/// assert_eq!(coerce_number("abc"), 0.0);
/// assert_eq!(coerce_number(""), 0.0);
/// ```
pub fn coerce_number(raw: &str) -> f64 {
    match parse_number(raw) {
        Ok(value) => value,
        Err(err) => {
            trace!(%err, "numeric input coerced to 0");
            0.0
        }
    }
}

/// Returns the longest prefix of `text` that reads as a decimal number.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &text[..end]
}

// =============================================================================
// Dates
// =============================================================================

/// Parses an ISO calendar date (`YYYY-MM-DD`), ignoring surrounding whitespace.
///
/// ## Example
/// ```rust
/// use invoice_core::coerce::parse_iso_date;
///
/// assert!(parse_iso_date("2025-03-04").is_ok());
/// assert!(parse_iso_date("2025-02-30").is_err());
/// assert!(parse_iso_date("").is_err());
/// ```
pub fn parse_iso_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            value: raw.to_string(),
        }
    })
}

/// Encodes a date the way the document stores it.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("0").unwrap(), 0.0);
        assert_eq!(parse_number("150").unwrap(), 150.0);
        assert_eq!(parse_number("8.5").unwrap(), 8.5);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("5.").unwrap(), 5.0);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
        assert_eq!(parse_number("+3").unwrap(), 3.0);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_number_lenient_prefix() {
        assert_eq!(parse_number("  12abc").unwrap(), 12.0);
        assert_eq!(parse_number("2.5 hours").unwrap(), 2.5);
        assert_eq!(parse_number("1e").unwrap(), 1.0);
        assert_eq!(parse_number("1e+").unwrap(), 1.0);
        assert_eq!(parse_number("1.25.5").unwrap(), 1.25);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(matches!(
            parse_number("abc"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(parse_number("").is_err());
        assert!(parse_number("   ").is_err());
        assert!(parse_number("-").is_err());
        assert!(parse_number(".").is_err());
        assert!(parse_number("$5").is_err());
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert!(matches!(
            parse_number("1e400"),
            Err(ValidationError::NonFinite { .. })
        ));
        // Words like "inf" / "NaN" have no numeric prefix at all
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn test_coerce_number_defaults_to_zero() {
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("1e400"), 0.0);
        assert_eq!(coerce_number("-2.5"), -2.5);
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2025-03-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(to_iso_date(date), "2025-03-04");

        assert!(parse_iso_date(" 2025-03-04 ").is_ok());
        assert!(parse_iso_date("2025-13-01").is_err());
        assert!(parse_iso_date("03/04/2025").is_err());
        assert!(parse_iso_date("not-a-date").is_err());
    }
}
