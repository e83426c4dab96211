//! # Invoice View
//!
//! A snapshot with every displayed value already formatted.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INVOICE                                         # INV-2025-123        │
//! │                                                                         │
//! │  Bill To: Acme Corp                   Date:      March 4, 2025          │
//! │                                       Due Date:  March 18, 2025         │
//! │                                       Terms:     Net 14                 │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  Consulting                 2        $150.00           $300.00          │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │                                Subtotal             $300.00             │
//! │                                Tax (8.5%)            $25.50             │
//! │                                Total                $325.50             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presentation surface and the print path both render from this, so the
//! screen and the exported document always agree.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::document::InvoiceSnapshot;
use crate::format::{format_currency, format_display_date, format_percentage};
use crate::line_items::{LineItem, LineItemId};

/// One formatted row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub id: LineItemId,
    pub description: String,
    /// Quantity as typed-back text (`2`, `1.5`).
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        LineItemView {
            id: item.id.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: format_currency(item.unit_price),
            amount: format_currency(item.amount()),
        }
    }
}

/// Fully formatted invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    pub invoice_number: String,
    pub issuer_name: String,
    pub issuer_address: String,
    pub client_name: String,
    pub client_address: String,
    pub issue_date: String,
    pub due_date: String,
    pub payment_terms: String,
    pub reference: Option<String>,
    pub notes: String,
    /// `data:` URL, if a logo was uploaded.
    pub logo: Option<String>,
    pub line_items: Vec<LineItemView>,
    /// e.g. `Tax (8.5%)`
    pub tax_label: String,
    pub subtotal: String,
    pub tax_amount: String,
    pub total: String,
}

impl From<&InvoiceSnapshot> for InvoiceView {
    fn from(snapshot: &InvoiceSnapshot) -> Self {
        let meta = &snapshot.metadata;
        InvoiceView {
            invoice_number: meta.invoice_number.clone(),
            issuer_name: meta.issuer_name.clone(),
            issuer_address: meta.issuer_address.clone(),
            client_name: meta.client_name.clone(),
            client_address: meta.client_address.clone(),
            issue_date: format_display_date(&meta.issue_date),
            due_date: format_display_date(&meta.due_date),
            payment_terms: meta.payment_terms.label().to_string(),
            reference: meta.reference.clone(),
            notes: meta.notes.clone(),
            logo: meta.logo.as_ref().map(|logo| logo.data_url.clone()),
            line_items: snapshot.line_items.iter().map(LineItemView::from).collect(),
            tax_label: format!("Tax ({})", format_percentage(snapshot.tax_rate.percentage())),
            subtotal: format_currency(snapshot.totals.subtotal),
            tax_amount: format_currency(snapshot.totals.tax_amount),
            total: format_currency(snapshot.totals.total),
        }
    }
}
