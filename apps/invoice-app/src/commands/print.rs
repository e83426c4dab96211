//! # Print Command
//!
//! Printing belongs to the host (browser print dialog, PDF writer, ...).
//! The controller only hands over the formatted invoice and moves on.

use tracing::info;

use crate::state::DocumentState;
use invoice_core::InvoiceView;

/// Host facility that renders an invoice to paper or PDF.
pub trait PrintHost: Send + Sync {
    /// Starts printing. Outcome is the host's business.
    fn print(&self, view: InvoiceView);
}

/// Sends the current invoice to the host's print facility.
///
/// Fire-and-forget: nothing is returned and the document is not touched.
/// The view is built under the lock, the host is called after it's released.
pub fn request_print(state: &DocumentState, host: &dyn PrintHost) {
    let view = state.with_document(|doc| InvoiceView::from(&doc.snapshot()));
    info!(invoice_number = %view.invoice_number, total = %view.total, "request_print command");
    host.print(view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::{InvoiceDocument, LineItemField, SequentialIds};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHost {
        printed: Mutex<Vec<InvoiceView>>,
    }

    impl PrintHost for RecordingHost {
        fn print(&self, view: InvoiceView) {
            self.printed.lock().unwrap().push(view);
        }
    }

    #[test]
    fn test_request_print_hands_view_to_host() {
        let state = DocumentState::new(InvoiceDocument::new(Box::new(SequentialIds::new())));
        state.with_document_mut(|doc| {
            doc.set_invoice_number("INV-2025-555");
            let id = doc.add_item();
            doc.update_item(&id, LineItemField::UnitPrice, "99.5");
        });
        let before = state.with_document(|doc| doc.snapshot());
        let host = RecordingHost::default();

        request_print(&state, &host);

        let printed = host.printed.lock().unwrap();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].invoice_number, "INV-2025-555");
        assert_eq!(printed[0].total, "$99.50");
        assert_eq!(state.with_document(|doc| doc.snapshot()), before);
    }
}
