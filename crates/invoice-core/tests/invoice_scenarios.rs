//! End-to-end editing scenarios against the public API.

use invoice_core::{
    format_currency, format_display_date, InvoiceDocument, InvoiceView, LineItemField,
    LineItemId, SequentialIds, TaxRate, Totals, UuidIds,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn add_row(doc: &mut InvoiceDocument, description: &str, quantity: &str, price: &str) -> LineItemId {
    let id = doc.add_item();
    doc.update_item(&id, LineItemField::Description, description);
    doc.update_item(&id, LineItemField::Quantity, quantity);
    doc.update_item(&id, LineItemField::UnitPrice, price);
    id
}

fn consulting_doc() -> (InvoiceDocument, LineItemId) {
    let mut doc = InvoiceDocument::new(Box::new(SequentialIds::new()));
    doc.set_tax_rate(TaxRate::new(8.5));
    let id = add_row(&mut doc, "Consulting", "2", "150");
    (doc, id)
}

#[test]
fn single_consulting_row() {
    let (doc, _) = consulting_doc();
    let totals = doc.snapshot().totals;

    assert_close(totals.subtotal, 300.0);
    assert_close(totals.tax_amount, 25.5);
    assert_close(totals.total, 325.5);
}

#[test]
fn second_row_adds_to_totals() {
    let (mut doc, _) = consulting_doc();
    add_row(&mut doc, "", "3", "10");
    let totals = doc.snapshot().totals;

    assert_close(totals.subtotal, 330.0);
    assert_close(totals.tax_amount, 28.05);
    assert_close(totals.total, 358.05);
    assert_eq!(format_currency(totals.total), "$358.05");
}

#[test]
fn removing_first_row_leaves_second() {
    let (mut doc, first) = consulting_doc();
    let second = add_row(&mut doc, "", "3", "10");

    doc.remove_item(&first);
    let snapshot = doc.snapshot();

    assert_eq!(snapshot.line_items.len(), 1);
    assert_eq!(snapshot.line_items[0].id, second);
    assert_close(snapshot.totals.subtotal, 30.0);
}

#[test]
fn add_then_remove_is_identity_for_any_start() {
    for rows in 0..4 {
        let mut doc = InvoiceDocument::new(Box::new(UuidIds));
        for n in 0..rows {
            add_row(&mut doc, &format!("row {n}"), &n.to_string(), "12.5");
        }
        let before = doc.snapshot();

        let id = doc.add_item();
        doc.remove_item(&id);

        assert_eq!(doc.snapshot(), before);
    }
}

#[test]
fn empty_document_totals_are_zero_for_any_rate() {
    let mut doc = InvoiceDocument::new(Box::new(SequentialIds::new()));
    for rate in ["0", "8.5", "100", "-3", "abc"] {
        doc.set_tax_rate_raw(rate);
        assert_eq!(doc.totals(), Totals::default());
    }
}

#[test]
fn non_numeric_edit_stores_zero_not_stale_value() {
    let (mut doc, id) = consulting_doc();
    doc.update_item(&id, LineItemField::Quantity, "abc");

    let item = doc.line_items().get(&id).unwrap();
    assert_eq!(item.quantity, 0.0);
    assert_eq!(doc.totals().subtotal, 0.0);
}

#[test]
fn totals_hold_across_rates() {
    let mut doc = InvoiceDocument::new(Box::new(SequentialIds::new()));
    add_row(&mut doc, "a", "3", "19.99");
    add_row(&mut doc, "b", "1.5", "40");

    for rate in [0.0, 5.0, 8.5, 12.75, 200.0] {
        doc.set_tax_rate(TaxRate::new(rate));
        let totals = doc.totals();
        assert_eq!(totals.tax_amount, totals.subtotal * (rate / 100.0));
        assert_eq!(totals.total, totals.subtotal + totals.tax_amount);
    }
}

#[test]
fn display_formats() {
    assert_eq!(format_display_date(""), "—");
    assert_eq!(format_display_date("not-a-date"), "—");
    assert_eq!(format_display_date("2025-03-04"), "March 4, 2025");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1234.5), "$1,234.50");
}

#[test]
fn half_cent_row_amount_rounds_up() {
    let mut doc = InvoiceDocument::new(Box::new(SequentialIds::new()));
    add_row(&mut doc, "Stamps", "0.5", "0.25");

    let view = InvoiceView::from(&doc.snapshot());

    assert_eq!(view.line_items[0].amount, "$0.13");
    assert_eq!(view.subtotal, "$0.13");
    assert_eq!(view.total, "$0.13");
}
