//! # Domain Types
//!
//! The value types that make up an invoice document.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │  InvoiceMetadata    │   │    TaxRate      │   │  PaymentTerms   │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  invoice_number     │   │  pct (f64)      │   │  DueOnReceipt   │   │
//! │  │  issuer / client    │   │  8.5 = 8.5%     │   │  Net7 .. Net60  │   │
//! │  │  issue / due date   │   │  never < 0      │   │  Custom(text)   │   │
//! │  │  terms, notes, logo │   └─────────────────┘   └─────────────────┘   │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  Line items and totals live in their own modules.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::coerce::{coerce_number, to_iso_date};
use crate::format::due_date_after;

// =============================================================================
// Tax Rate
// =============================================================================

/// A flat tax rate stored as a plain percentage (`8.5` means 8.5%).
///
/// ## Invariant
/// Always finite and `>= 0`. Negative or non-finite input becomes `0`.
/// There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from a percentage, clamping invalid values to zero.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::TaxRate;
    ///
    /// assert_eq!(TaxRate::new(8.5).percentage(), 8.5);
    /// assert_eq!(TaxRate::new(-3.0).percentage(), 0.0);
    /// ```
    pub fn new(pct: f64) -> Self {
        if pct.is_finite() && pct > 0.0 {
            TaxRate(pct)
        } else {
            if pct != 0.0 {
                trace!(pct, "tax rate coerced to 0");
            }
            TaxRate(0.0)
        }
    }

    /// Parses the raw text of the tax rate field.
    ///
    /// Same leniency as the numeric line item fields, then negatives clamp to 0.
    pub fn parse(raw: &str) -> Self {
        TaxRate::new(coerce_number(raw))
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a multiplier (`8.5%` → `0.085`).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl From<f64> for TaxRate {
    fn from(pct: f64) -> Self {
        TaxRate::new(pct)
    }
}

impl From<TaxRate> for f64 {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Payment Terms
// =============================================================================

/// When the client is expected to pay.
///
/// Serialized as its display label so the frontend can bind it straight to a
/// select box with a free-text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentTerms {
    DueOnReceipt,
    Net7,
    Net14,
    Net30,
    Net60,
    /// Anything the user typed that isn't one of the standard terms.
    Custom(String),
}

impl PaymentTerms {
    /// The enumerated choices, in display order.
    pub const STANDARD: [PaymentTerms; 5] = [
        PaymentTerms::DueOnReceipt,
        PaymentTerms::Net7,
        PaymentTerms::Net14,
        PaymentTerms::Net30,
        PaymentTerms::Net60,
    ];

    /// Label shown on the invoice.
    pub fn label(&self) -> &str {
        match self {
            PaymentTerms::DueOnReceipt => "Due on receipt",
            PaymentTerms::Net7 => "Net 7",
            PaymentTerms::Net14 => "Net 14",
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net60 => "Net 60",
            PaymentTerms::Custom(text) => text,
        }
    }

    /// Matches a standard label case-insensitively, otherwise keeps the text.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::PaymentTerms;
    ///
    /// assert_eq!(PaymentTerms::from_label("net 30"), PaymentTerms::Net30);
    /// assert_eq!(
    ///     PaymentTerms::from_label("50% upfront"),
    ///     PaymentTerms::Custom("50% upfront".to_string())
    /// );
    /// ```
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        PaymentTerms::STANDARD
            .iter()
            .find(|terms| terms.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| PaymentTerms::Custom(label.to_string()))
    }

    /// Number of days until payment is due, for the standard terms.
    pub fn days(&self) -> Option<u64> {
        match self {
            PaymentTerms::DueOnReceipt => Some(0),
            PaymentTerms::Net7 => Some(7),
            PaymentTerms::Net14 => Some(14),
            PaymentTerms::Net30 => Some(30),
            PaymentTerms::Net60 => Some(60),
            PaymentTerms::Custom(_) => None,
        }
    }
}

impl Default for PaymentTerms {
    fn default() -> Self {
        PaymentTerms::Net14
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for PaymentTerms {
    fn from(label: String) -> Self {
        PaymentTerms::from_label(&label)
    }
}

impl From<PaymentTerms> for String {
    fn from(terms: PaymentTerms) -> Self {
        terms.label().to_string()
    }
}

// =============================================================================
// Logo
// =============================================================================

/// A displayable logo reference (a `data:` URL the frontend can use as an
/// image source directly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    /// Sniffed MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

// =============================================================================
// Invoice Metadata
// =============================================================================

/// Everything on the invoice that isn't a line item or a total.
///
/// ## Notes
/// - Dates are stored as the raw ISO text the user entered (or empty).
///   Display goes through `format_display_date`, which tolerates garbage.
/// - The due date is not required to be on or after the issue date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMetadata {
    pub invoice_number: String,
    pub issuer_name: String,
    pub issuer_address: String,
    pub client_name: String,
    pub client_address: String,
    /// ISO `YYYY-MM-DD`, may be empty.
    pub issue_date: String,
    /// ISO `YYYY-MM-DD`, may be empty.
    pub due_date: String,
    #[ts(type = "string")]
    pub payment_terms: PaymentTerms,
    /// Optional PO / project reference.
    pub reference: Option<String>,
    pub notes: String,
    pub logo: Option<Logo>,
}

impl InvoiceMetadata {
    /// Metadata for a fresh invoice issued on `today`.
    ///
    /// The due date is derived once here; later edits to the issue date do
    /// not move it.
    pub fn issued_on(today: NaiveDate, due_in_days: u64) -> Self {
        InvoiceMetadata {
            issue_date: to_iso_date(today),
            due_date: due_date_after(today, due_in_days),
            ..InvoiceMetadata::default()
        }
    }
}

impl Default for InvoiceMetadata {
    fn default() -> Self {
        InvoiceMetadata {
            invoice_number: String::new(),
            issuer_name: String::new(),
            issuer_address: String::new(),
            client_name: String::new(),
            client_address: String::new(),
            issue_date: String::new(),
            due_date: String::new(),
            payment_terms: PaymentTerms::default(),
            reference: None,
            notes: String::new(),
            logo: None,
        }
    }
}

/// Text fields of [`InvoiceMetadata`] that the frontend edits by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    InvoiceNumber,
    IssuerName,
    IssuerAddress,
    ClientName,
    ClientAddress,
    IssueDate,
    DueDate,
    PaymentTerms,
    Reference,
    Notes,
}

// =============================================================================
// Invoice Number
// =============================================================================

/// Builds a default invoice number: `{prefix}-{year}-{nnn}`, `nnn` in 100..=999.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use invoice_core::types::default_invoice_number;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let number = default_invoice_number("INV", today, &mut rand::thread_rng());
/// assert!(number.starts_with("INV-2025-"));
/// assert_eq!(number.len(), "INV-2025-123".len());
/// ```
pub fn default_invoice_number<R: Rng + ?Sized>(prefix: &str, today: NaiveDate, rng: &mut R) -> String {
    let suffix: u32 = rng.gen_range(100..=999);
    format!("{}-{}-{:03}", prefix, today.year(), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================
