//! # Document Commands
//!
//! Commands that edit the live invoice.
//!
//! ## Editing Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Editing                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐                      │
//! │  │  Seeded  │────►│ Editing  │────►│   Print    │                      │
//! │  │ document │     │          │     │ (print.rs) │                      │
//! │  └──────────┘     └──────────┘     └────────────┘                      │
//! │                        │                                                │
//! │                   add_item          update_metadata                    │
//! │                   update_item       set_payment_terms                  │
//! │                   remove_item       set_tax_rate                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   new_invoice ─────────────► (back to seeded)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edits never fail: bad numbers become `0`, unknown ids are ignored.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::state::{ConfigState, DocumentState};
use invoice_core::{
    InvoiceDocument, InvoiceSnapshot, InvoiceView, LineItemField, LineItemId, MetadataField,
    PaymentTerms,
};

/// Document response: raw snapshot plus the formatted view of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub snapshot: InvoiceSnapshot,
    pub view: InvoiceView,
}

impl From<&InvoiceDocument> for DocumentResponse {
    fn from(doc: &InvoiceDocument) -> Self {
        let snapshot = doc.snapshot();
        let view = InvoiceView::from(&snapshot);
        DocumentResponse { snapshot, view }
    }
}

/// Response to [`add_item`]: the new row's id so the frontend can focus it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub id: LineItemId,
    pub document: DocumentResponse,
}

/// Gets the current document.
pub fn get_document(state: &DocumentState) -> DocumentResponse {
    debug!("get_document command");
    state.with_document(|doc| DocumentResponse::from(doc))
}

/// Appends a blank row (quantity 1, price 0).
pub fn add_item(state: &DocumentState) -> AddItemResponse {
    state.with_document_mut(|doc| {
        let id = doc.add_item();
        debug!(id = %id, "add_item command");
        AddItemResponse {
            id,
            document: DocumentResponse::from(&*doc),
        }
    })
}

/// Edits one column of a row from raw field text.
///
/// ## Behavior
/// - Quantity / unit price: numeric prefix of `value`, `0` if none
/// - Unknown `id`: no change
pub fn update_item(
    state: &DocumentState,
    id: &str,
    field: LineItemField,
    value: &str,
) -> DocumentResponse {
    debug!(id, ?field, "update_item command");

    state.with_document_mut(|doc| {
        doc.update_item(&LineItemId::from(id), field, value);
        DocumentResponse::from(&*doc)
    })
}

/// Removes a row. Unknown ids are ignored.
pub fn remove_item(state: &DocumentState, id: &str) -> DocumentResponse {
    debug!(id, "remove_item command");

    state.with_document_mut(|doc| {
        doc.remove_item(&LineItemId::from(id));
        DocumentResponse::from(&*doc)
    })
}

/// Replaces one metadata text field.
pub fn update_metadata(
    state: &DocumentState,
    field: MetadataField,
    value: &str,
) -> DocumentResponse {
    debug!(?field, "update_metadata command");

    state.with_document_mut(|doc| {
        doc.set_field(field, value);
        DocumentResponse::from(&*doc)
    })
}

/// Sets payment terms from a label (`"Net 30"`, or any custom text).
pub fn set_payment_terms(state: &DocumentState, terms: &str) -> DocumentResponse {
    let terms = PaymentTerms::from_label(terms);
    debug!(terms = %terms, "set_payment_terms command");

    state.with_document_mut(|doc| {
        doc.set_payment_terms(terms);
        DocumentResponse::from(&*doc)
    })
}

/// Sets the tax rate from raw field text (`"8.5"`).
pub fn set_tax_rate(state: &DocumentState, value: &str) -> DocumentResponse {
    debug!(value, "set_tax_rate command");

    state.with_document_mut(|doc| {
        doc.set_tax_rate_raw(value);
        DocumentResponse::from(&*doc)
    })
}

/// Discards the current invoice and starts a fresh one from config.
pub fn new_invoice(
    state: &DocumentState,
    config: &ConfigState,
    today: NaiveDate,
) -> DocumentResponse {
    let seed = config.seed(today, &mut rand::thread_rng());
    info!(invoice_number = %seed.invoice_number, "new_invoice command");

    let document = InvoiceDocument::seeded(seed, config.id_strategy.generator());
    let response = DocumentResponse::from(&document);
    state.replace(document);
    response
}
