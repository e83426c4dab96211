//! # Document State
//!
//! Owns the one live invoice.
//!
//! ## Access Pattern
//! The document sits behind `Arc<Mutex<_>>` so the logo upload task can hold
//! a handle while the presentation surface keeps editing. Every command runs
//! its mutation and builds its response inside one lock, so a response never
//! mixes the old line items with new totals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  edit command ──► with_document_mut(|doc| { mutate; snapshot })         │
//! │                                                                         │
//! │  read command ──► with_document(|doc| snapshot)                         │
//! │                                                                         │
//! │  logo task ─────► (read file, no lock) ──► with_document_mut(set_logo)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use invoice_core::InvoiceDocument;

/// Shared handle to the live document.
///
/// Cloning the handle does not clone the document.
#[derive(Debug, Clone)]
pub struct DocumentState {
    document: Arc<Mutex<InvoiceDocument>>,
}

impl DocumentState {
    pub fn new(document: InvoiceDocument) -> Self {
        DocumentState {
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Executes a function with read access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = state.with_document(|doc| doc.snapshot());
    /// ```
    pub fn with_document<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDocument) -> R,
    {
        let document = self.document.lock().unwrap_or_else(PoisonError::into_inner);
        f(&document)
    }

    /// Executes a function with write access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let id = state.with_document_mut(|doc| doc.add_item());
    /// ```
    pub fn with_document_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDocument) -> R,
    {
        let mut document = self.document.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut document)
    }

    /// Swaps in a whole new document (used by "new invoice").
    pub fn replace(&self, document: InvoiceDocument) {
        self.with_document_mut(|current| *current = document);
    }
}
