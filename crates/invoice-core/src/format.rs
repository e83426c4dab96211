//! # Formatting Utilities
//!
//! Pure functions that turn stored values into the strings shown on the
//! invoice.
//!
//! ## Determinism
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Same input → same string, on every machine                             │
//! │                                                                         │
//! │  format_currency(1234.5)          → "$1,234.50"                         │
//! │  format_currency(0.0)             → "$0.00"                             │
//! │  format_currency(-42.0)           → "-$42.00"                           │
//! │                                                                         │
//! │  format_display_date("2025-03-04") → "March 4, 2025"                    │
//! │  format_display_date("")           → "—"                                │
//! │                                                                         │
//! │  Nothing here reads the host locale. The invoice is always en-US/USD.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::coerce::{parse_iso_date, to_iso_date};

/// Shown wherever a date is missing or unreadable.
pub const DATE_PLACEHOLDER: &str = "—";

/// Days between issue date and the default due date.
pub const DEFAULT_DUE_DAYS: u64 = 14;

const CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Currency
// =============================================================================

/// Formats an amount as US dollars: symbol, thousands separators, two decimals.
///
/// Rounding to cents happens here and only here, on the exact value of the
/// `f64`, with half-cent ties rounded away from zero (`0.125` → `$0.13`).
/// Amounts that round to zero print as `$0.00` without a sign.
///
/// ## Example
/// ```rust
/// use invoice_core::format::format_currency;
///
/// assert_eq!(format_currency(0.0), "$0.00");
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-1234.5), "-$1,234.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, CURRENCY_SYMBOL);
    }

    let fixed = round_to_cents(amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.bytes().all(|b| b == b'0') && cents.bytes().all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        cents
    )
}

/// Two-decimal text of a non-negative amount, ties away from zero.
fn round_to_cents(abs: f64) -> String {
    match Decimal::from_f64_retain(abs) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        // Past Decimal's range an f64 has no fractional digits left to round.
        None => format!("{:.2}", abs),
    }
}

/// Inserts a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a percentage with the shortest exact representation (`8.5`, `10`).
pub fn format_percentage(pct: f64) -> String {
    format!("{}%", pct)
}

// =============================================================================
// Dates
// =============================================================================

/// Renders a stored ISO date as a long-form US date.
///
/// Empty or malformed input never fails; it degrades to [`DATE_PLACEHOLDER`].
///
/// ## Example
/// ```rust
/// use invoice_core::format::{format_display_date, DATE_PLACEHOLDER};
///
/// assert_eq!(format_display_date("2025-03-04"), "March 4, 2025");
/// assert_eq!(format_display_date(""), DATE_PLACEHOLDER);
/// assert_eq!(format_display_date("not-a-date"), DATE_PLACEHOLDER);
/// ```
pub fn format_display_date(date: &str) -> String {
    match parse_iso_date(date) {
        Ok(date) => format_long_date(date),
        Err(_) => DATE_PLACEHOLDER.to_string(),
    }
}

/// `March 4, 2025` style, no zero padding on the day.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Default due date: the issue date plus [`DEFAULT_DUE_DAYS`], ISO encoded.
///
/// Only used when a document is created; after that the due date is
/// whatever the user typed.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use invoice_core::format::compute_default_due_date;
///
/// let issue = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// assert_eq!(compute_default_due_date(issue), "2025-03-18");
/// ```
pub fn compute_default_due_date(issue: NaiveDate) -> String {
    due_date_after(issue, DEFAULT_DUE_DAYS)
}

/// Issue date plus `days`, ISO encoded. Saturates at the last representable date.
pub fn due_date_after(issue: NaiveDate, days: u64) -> String {
    let due = issue.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    to_iso_date(due)
}

// =============================================================================
// Unit Tests
// =============================================================================
