//! # Invoice Document Model
//!
//! The single mutable invoice the editor works on, and the immutable
//! snapshots handed to whoever renders it.
//!
//! ## Edit → Snapshot Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Edit, One Snapshot                               │
//! │                                                                         │
//! │  user edit ──► InvoiceDocument::set_* / *_item  (&mut self)             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               snapshot()  ← totals recomputed here, every time          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  InvoiceSnapshot { metadata, line_items, tax_rate, totals }             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  presentation surface re-renders                                       │
//! │                                                                         │
//! │  There is no cached total, so no snapshot can pair new items with old  │
//! │  totals. `&mut self` on every mutation means no reader sees a          │
//! │  half-applied edit.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::DEFAULT_DUE_DAYS;
use crate::line_items::{IdGenerator, LineItem, LineItemField, LineItemId, LineItemStore};
use crate::totals::Totals;
use crate::types::{InvoiceMetadata, Logo, MetadataField, PaymentTerms, TaxRate};

// =============================================================================
// Seed
// =============================================================================

/// Starting values for a new document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSeed {
    /// Issue date; the default due date is derived from it once.
    pub today: NaiveDate,
    pub invoice_number: String,
    pub issuer_name: String,
    pub issuer_address: String,
    pub notes: String,
    pub payment_terms: PaymentTerms,
    pub tax_rate: TaxRate,
    pub due_in_days: u64,
    /// Description of a pre-filled first row (quantity 1, price 0), if any.
    pub first_item: Option<String>,
}

impl DocumentSeed {
    /// A blank invoice issued on `today` with the standard 14 day due date.
    pub fn blank(today: NaiveDate) -> Self {
        DocumentSeed {
            today,
            invoice_number: String::new(),
            issuer_name: String::new(),
            issuer_address: String::new(),
            notes: String::new(),
            payment_terms: PaymentTerms::default(),
            tax_rate: TaxRate::zero(),
            due_in_days: DEFAULT_DUE_DAYS,
            first_item: None,
        }
    }
}

// =============================================================================
// Document
// =============================================================================

/// The live invoice being edited.
///
/// Owned by exactly one controller; everyone else gets an
/// [`InvoiceSnapshot`] or refers to rows by [`LineItemId`].
#[derive(Debug)]
pub struct InvoiceDocument {
    metadata: InvoiceMetadata,
    items: LineItemStore,
    tax_rate: TaxRate,
}

impl InvoiceDocument {
    /// Creates an empty document: blank metadata, no items, zero tax.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        InvoiceDocument {
            metadata: InvoiceMetadata::default(),
            items: LineItemStore::new(ids),
            tax_rate: TaxRate::zero(),
        }
    }

    /// Creates a document pre-filled from `seed`.
    pub fn seeded(seed: DocumentSeed, ids: Box<dyn IdGenerator>) -> Self {
        let mut metadata = InvoiceMetadata::issued_on(seed.today, seed.due_in_days);
        metadata.invoice_number = seed.invoice_number;
        metadata.issuer_name = seed.issuer_name;
        metadata.issuer_address = seed.issuer_address;
        metadata.notes = seed.notes;
        metadata.payment_terms = seed.payment_terms;

        let mut doc = InvoiceDocument {
            metadata,
            items: LineItemStore::new(ids),
            tax_rate: seed.tax_rate,
        };

        if let Some(description) = seed.first_item {
            let id = doc.items.add_item();
            doc.items
                .update_item(&id, LineItemField::Description, &description);
        }

        doc
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn metadata(&self) -> &InvoiceMetadata {
        &self.metadata
    }

    pub fn line_items(&self) -> &LineItemStore {
        &self.items
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Totals for the current items and tax rate, computed on every call.
    pub fn totals(&self) -> Totals {
        Totals::compute(self.items.as_slice(), self.tax_rate)
    }

    /// Freezes the current state for rendering.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            metadata: self.metadata.clone(),
            line_items: self.items.snapshot(),
            tax_rate: self.tax_rate,
            totals: self.totals(),
        }
    }

    // -------------------------------------------------------------------------
    // Line items
    // -------------------------------------------------------------------------

    /// Appends a blank row (quantity 1, price 0) and returns its id.
    pub fn add_item(&mut self) -> LineItemId {
        self.items.add_item()
    }

    /// Applies a raw edit to one field of a row. Unknown ids are ignored.
    pub fn update_item(&mut self, id: &LineItemId, field: LineItemField, raw: &str) -> bool {
        self.items.update_item(id, field, raw)
    }

    /// Removes a row. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        self.items.remove_item(id)
    }

    // -------------------------------------------------------------------------
    // Tax rate
    // -------------------------------------------------------------------------

    pub fn set_tax_rate(&mut self, rate: TaxRate) {
        self.tax_rate = rate;
    }

    /// Sets the tax rate from the raw text of its input.
    pub fn set_tax_rate_raw(&mut self, raw: &str) {
        self.tax_rate = TaxRate::parse(raw);
    }

    // -------------------------------------------------------------------------
    // Metadata setters
    // -------------------------------------------------------------------------

    pub fn set_invoice_number(&mut self, value: impl Into<String>) {
        self.metadata.invoice_number = value.into();
    }

    pub fn set_issuer_name(&mut self, value: impl Into<String>) {
        self.metadata.issuer_name = value.into();
    }

    pub fn set_issuer_address(&mut self, value: impl Into<String>) {
        self.metadata.issuer_address = value.into();
    }

    pub fn set_client_name(&mut self, value: impl Into<String>) {
        self.metadata.client_name = value.into();
    }

    pub fn set_client_address(&mut self, value: impl Into<String>) {
        self.metadata.client_address = value.into();
    }

    /// Stores the raw date text; it is not validated or reformatted.
    pub fn set_issue_date(&mut self, value: impl Into<String>) {
        self.metadata.issue_date = value.into();
    }

    /// Stores the raw date text. May precede the issue date.
    pub fn set_due_date(&mut self, value: impl Into<String>) {
        self.metadata.due_date = value.into();
    }

    pub fn set_payment_terms(&mut self, terms: PaymentTerms) {
        self.metadata.payment_terms = terms;
    }

    pub fn set_reference(&mut self, value: Option<String>) {
        self.metadata.reference = value;
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.metadata.notes = value.into();
    }

    pub fn set_logo(&mut self, logo: Option<Logo>) {
        self.metadata.logo = logo;
    }

    /// Routes a raw text edit to the matching setter.
    ///
    /// An empty reference clears it; payment terms go through
    /// [`PaymentTerms::from_label`].
    pub fn set_field(&mut self, field: MetadataField, raw: &str) {
        match field {
            MetadataField::InvoiceNumber => self.set_invoice_number(raw),
            MetadataField::IssuerName => self.set_issuer_name(raw),
            MetadataField::IssuerAddress => self.set_issuer_address(raw),
            MetadataField::ClientName => self.set_client_name(raw),
            MetadataField::ClientAddress => self.set_client_address(raw),
            MetadataField::IssueDate => self.set_issue_date(raw),
            MetadataField::DueDate => self.set_due_date(raw),
            MetadataField::PaymentTerms => self.set_payment_terms(PaymentTerms::from_label(raw)),
            MetadataField::Reference => {
                let reference = (!raw.trim().is_empty()).then(|| raw.to_string());
                self.set_reference(reference)
            }
            MetadataField::Notes => self.set_notes(raw),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only picture of the document at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    pub metadata: InvoiceMetadata,
    pub line_items: Arc<Vec<LineItem>>,
    #[ts(type = "number")]
    pub tax_rate: TaxRate,
    /// Serialized inline: `subtotal`, `taxAmount`, `total`.
    #[serde(flatten)]
    pub totals: Totals,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_items::SequentialIds;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    fn empty_doc() -> InvoiceDocument {
        InvoiceDocument::new(Box::new(SequentialIds::new()))
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = empty_doc();
        let snap = doc.snapshot();
        assert!(snap.line_items.is_empty());
        assert_eq!(snap.totals, Totals::default());
        assert!(snap.tax_rate.is_zero());
    }

    #[test]
    fn test_seeded_document() {
        let seed = DocumentSeed {
            invoice_number: "INV-2025-123".to_string(),
            issuer_name: "Kenar Tutors".to_string(),
            notes: "Thank you for your business!".to_string(),
            tax_rate: TaxRate::new(8.5),
            first_item: Some("Resume Writing".to_string()),
            ..DocumentSeed::blank(today())
        };
        let doc = InvoiceDocument::seeded(seed, Box::new(SequentialIds::new()));

        let meta = doc.metadata();
        assert_eq!(meta.invoice_number, "INV-2025-123");
        assert_eq!(meta.issuer_name, "Kenar Tutors");
        assert_eq!(meta.issue_date, "2025-03-04");
        assert_eq!(meta.due_date, "2025-03-18");
        assert_eq!(doc.tax_rate().percentage(), 8.5);

        let items = doc.line_items().as_slice();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Resume Writing");
        assert_eq!(items[0].quantity, 1.0);
        assert_eq!(items[0].unit_price, 0.0);
    }

    #[test]
    fn test_snapshot_totals_follow_every_edit() {
        let mut doc = empty_doc();
        doc.set_tax_rate(TaxRate::new(10.0));
        let id = doc.add_item();
        doc.update_item(&id, LineItemField::UnitPrice, "50");
        assert_eq!(doc.snapshot().totals.subtotal, 50.0);

        doc.update_item(&id, LineItemField::Quantity, "2");
        assert_eq!(doc.snapshot().totals.subtotal, 100.0);

        doc.set_tax_rate_raw("0");
        let snap = doc.snapshot();
        assert_eq!(snap.totals.tax_amount, 0.0);
        assert_eq!(snap.totals.total, 100.0);

        doc.remove_item(&id);
        assert_eq!(doc.snapshot().totals, Totals::default());
    }

    #[test]
    fn test_old_snapshot_unaffected_by_edits() {
        let mut doc = empty_doc();
        let id = doc.add_item();
        doc.update_item(&id, LineItemField::UnitPrice, "10");
        let before = doc.snapshot();

        doc.update_item(&id, LineItemField::UnitPrice, "99");
        doc.set_client_name("Acme");

        assert_eq!(before.line_items[0].unit_price, 10.0);
        assert_eq!(before.totals.subtotal, 10.0);
        assert_eq!(before.metadata.client_name, "");
    }

    #[test]
    fn test_negative_tax_rate_input_clamped() {
        let mut doc = empty_doc();
        doc.set_tax_rate_raw("-8");
        assert!(doc.tax_rate().is_zero());
        doc.set_tax_rate_raw("garbage");
        assert!(doc.tax_rate().is_zero());
    }

    #[test]
    fn test_set_field_routes_to_metadata() {
        let mut doc = empty_doc();
        doc.set_field(MetadataField::InvoiceNumber, "INV-1");
        doc.set_field(MetadataField::IssuerName, "Kenar Tutors");
        doc.set_field(MetadataField::IssuerAddress, "1 Main St");
        doc.set_field(MetadataField::ClientName, "Acme");
        doc.set_field(MetadataField::ClientAddress, "2 Side St");
        doc.set_field(MetadataField::IssueDate, "2025-03-04");
        doc.set_field(MetadataField::DueDate, "2025-03-01");
        doc.set_field(MetadataField::PaymentTerms, "net 30");
        doc.set_field(MetadataField::Reference, "PO-77");
        doc.set_field(MetadataField::Notes, "Thanks");

        let meta = doc.metadata();
        assert_eq!(meta.invoice_number, "INV-1");
        assert_eq!(meta.issuer_name, "Kenar Tutors");
        assert_eq!(meta.issuer_address, "1 Main St");
        assert_eq!(meta.client_name, "Acme");
        assert_eq!(meta.client_address, "2 Side St");
        assert_eq!(meta.issue_date, "2025-03-04");
        // Due before issue is accepted as entered
        assert_eq!(meta.due_date, "2025-03-01");
        assert_eq!(meta.payment_terms, PaymentTerms::Net30);
        assert_eq!(meta.reference.as_deref(), Some("PO-77"));
        assert_eq!(meta.notes, "Thanks");
    }

    #[test]
    fn test_empty_reference_clears() {
        let mut doc = empty_doc();
        doc.set_field(MetadataField::Reference, "PO-77");
        doc.set_field(MetadataField::Reference, "   ");
        assert!(doc.metadata().reference.is_none());
    }

    #[test]
    fn test_dates_stored_verbatim() {
        let mut doc = empty_doc();
        doc.set_issue_date("not-a-date");
        doc.set_due_date("");
        assert_eq!(doc.metadata().issue_date, "not-a-date");
        assert_eq!(doc.metadata().due_date, "");
    }

    #[test]
    fn test_logo_set_and_clear() {
        let mut doc = empty_doc();
        let logo = Logo {
            mime_type: "image/png".to_string(),
            data_url: "data:image/png;base64,AAAA".to_string(),
        };
        doc.set_logo(Some(logo.clone()));
        assert_eq!(doc.metadata().logo.as_ref(), Some(&logo));
        doc.set_logo(None);
        assert!(doc.metadata().logo.is_none());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut doc = empty_doc();
        doc.set_tax_rate(TaxRate::new(8.5));
        doc.add_item();
        let json = serde_json::to_value(doc.snapshot()).unwrap();

        assert_eq!(json["taxRate"], 8.5);
        assert_eq!(json["lineItems"][0]["id"], "item-1");
        assert_eq!(json["taxAmount"], 0.0);
        assert_eq!(json["total"], 0.0);
        assert_eq!(json["metadata"]["paymentTerms"], "Net 14");
    }
}
