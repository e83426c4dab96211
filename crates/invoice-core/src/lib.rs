//! # invoice-core: Pure Document Model for Invoice Studio
//!
//! This crate is the **heart** of Invoice Studio. It holds the invoice being
//! edited and derives everything shown on it, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Invoice Studio Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Surface (external)                 │   │
//! │  │    Form fields ──► Live preview ──► Print / PDF                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    invoice-app (controller)                     │   │
//! │  │    add_item, update_item, set_tax_rate, upload_logo, print      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ invoice-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  format   │  │line_items │  │  totals   │  │ document  │  │   │
//! │  │   │ currency  │  │  store    │  │ subtotal  │  │ snapshot  │  │   │
//! │  │   │  dates    │  │  ids      │  │ tax/total │  │  view     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Metadata, tax rate, payment terms, logo
//! - [`line_items`] - Ordered line item store with injected id generation
//! - [`totals`] - Subtotal / tax / total derivation
//! - [`document`] - The editable document and its snapshots
//! - [`view`] - Snapshot with every value formatted for display
//! - [`format`] - Currency and date formatting
//! - [`coerce`] - Raw field text → stored values
//! - [`logo`] - Image bytes → data URL
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Derived, never stored**: totals are recomputed from items and tax rate
//! 2. **Edits always land**: bad numeric text becomes `0`, bad dates render as
//!    a placeholder, unknown ids are no-ops
//! 3. **Float math, cent display**: `f64` arithmetic, rounded only when formatted
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{InvoiceDocument, LineItemField, SequentialIds, TaxRate};
//!
//! let mut doc = InvoiceDocument::new(Box::new(SequentialIds::new()));
//! doc.set_tax_rate(TaxRate::new(8.5));
//!
//! let id = doc.add_item();
//! doc.update_item(&id, LineItemField::Description, "Consulting");
//! doc.update_item(&id, LineItemField::Quantity, "2");
//! doc.update_item(&id, LineItemField::UnitPrice, "150");
//!
//! let snapshot = doc.snapshot();
//! assert_eq!(snapshot.totals.subtotal, 300.0);
//! assert_eq!(invoice_core::format_currency(snapshot.totals.total), "$325.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod document;
pub mod error;
pub mod format;
pub mod line_items;
pub mod logo;
pub mod totals;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::{DocumentSeed, InvoiceDocument, InvoiceSnapshot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{compute_default_due_date, format_currency, format_display_date};
pub use line_items::{
    IdGenerator, LineItem, LineItemField, LineItemId, LineItemStore, SequentialIds, UuidIds,
};
pub use totals::Totals;
pub use types::{InvoiceMetadata, Logo, MetadataField, PaymentTerms, TaxRate};
pub use view::{InvoiceView, LineItemView};
