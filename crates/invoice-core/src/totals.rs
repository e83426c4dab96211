//! # Totals Engine
//!
//! Derives subtotal, tax and total from the line items and the tax rate.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line items ──► Σ quantity × unit_price ──► subtotal                    │
//! │                                               │                         │
//! │  tax rate ─────────────► subtotal × rate/100 ─┴─► tax_amount            │
//! │                                               │                         │
//! │                           subtotal + tax_amount ─► total                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored. They are recomputed from the current inputs every
//! time a snapshot is taken, so they can't go stale. Plain `f64` arithmetic;
//! rounding to cents only happens when formatting. Signs are not clamped.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line_items::LineItem;
use crate::types::TaxRate;

/// Derived amounts for one state of the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl Totals {
    /// Runs the pipeline over `items` in order.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::{Totals, TaxRate};
    ///
    /// let totals = Totals::compute(&[], TaxRate::new(8.5));
    /// assert_eq!(totals, Totals::default());
    /// ```
    pub fn compute(items: &[LineItem], tax_rate: TaxRate) -> Self {
        let subtotal = subtotal(items);
        let tax_amount = tax_amount(subtotal, tax_rate);
        Totals {
            subtotal,
            tax_amount,
            total: subtotal + tax_amount,
        }
    }
}

/// Σ quantity × unit price, accumulated in insertion order from `0.0`.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.amount())
}

/// `subtotal × (rate / 100)`.
pub fn tax_amount(subtotal: f64, tax_rate: TaxRate) -> f64 {
    subtotal * tax_rate.fraction()
}

// =============================================================================
// Unit Tests
// =============================================================================
