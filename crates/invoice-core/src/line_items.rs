//! # Line Item Store
//!
//! The ordered list of billable rows on the invoice.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Operations                                 │
//! │                                                                         │
//! │  Frontend Action          Store Call              Collection Change     │
//! │  ───────────────          ──────────              ─────────────────     │
//! │                                                                         │
//! │  Click "+ Add Item" ────► add_item() ───────────► push(fresh id, 1 × 0) │
//! │                                                                         │
//! │  Type in a cell ────────► update_item(id, f, s) ► items[i].f = parse(s) │
//! │                                                                         │
//! │  Click trash icon ──────► remove_item(id) ──────► retain(id != x)       │
//! │                                                                         │
//! │  NOTE: unknown ids are silent no-ops, never errors.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! The collection lives behind an `Arc`. Readers clone the `Arc` and keep a
//! frozen view; writers go through `Arc::make_mut`, so a reader holding an
//! older snapshot never sees a half-applied edit.
//!
//! ## Identity
//! Ids come from an injected [`IdGenerator`] and never change for the life of
//! a row. Insertion order is display order and summation order.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::coerce::coerce_number;

// =============================================================================
// Identity
// =============================================================================

/// Opaque, stable identifier of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemId(String);

impl LineItemId {
    /// Wraps an id received from the frontend.
    pub fn new(id: impl Into<String>) -> Self {
        LineItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineItemId {
    fn from(id: &str) -> Self {
        LineItemId::new(id)
    }
}

/// Source of fresh line item ids.
///
/// Every call must return an id never returned before by this generator.
pub trait IdGenerator: fmt::Debug + Send + Sync {
    fn next_id(&mut self) -> LineItemId;
}

/// Monotonic counter: `item-1`, `item-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        SequentialIds::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> LineItemId {
        self.last += 1;
        LineItemId(format!("item-{}", self.last))
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> LineItemId {
        LineItemId(Uuid::new_v4().to_string())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One billable row.
///
/// Quantity and unit price are always finite. They are expected to be
/// non-negative, but a negative number the user actually typed is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    /// A fresh row: empty description, one unit, zero price.
    fn blank(id: LineItemId) -> Self {
        LineItem {
            id,
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }

    /// Row amount before tax (quantity × unit price).
    #[inline]
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Applies one raw field edit.
    fn apply(&mut self, field: LineItemField, raw: &str) {
        match field {
            LineItemField::Description => self.description = raw.to_string(),
            LineItemField::Quantity => self.quantity = coerce_number(raw),
            LineItemField::UnitPrice => self.unit_price = coerce_number(raw),
        }
    }
}

/// Editable columns of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum LineItemField {
    Description,
    Quantity,
    UnitPrice,
}

// =============================================================================
// Store
// =============================================================================

/// Ordered collection of line items with stable ids.
#[derive(Debug)]
pub struct LineItemStore {
    items: Arc<Vec<LineItem>>,
    ids: Box<dyn IdGenerator>,
}

impl LineItemStore {
    /// Creates an empty store that draws ids from `ids`.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        LineItemStore {
            items: Arc::new(Vec::new()),
            ids,
        }
    }

    /// Appends a blank row and returns its id so the caller can focus it.
    pub fn add_item(&mut self) -> LineItemId {
        let id = self.ids.next_id();
        debug!(id = %id, "line item added");
        Arc::make_mut(&mut self.items).push(LineItem::blank(id.clone()));
        id
    }

    /// Applies a raw text edit to one field of the row with `id`.
    ///
    /// ## Behavior
    /// - `Description`: stored verbatim, empty string included
    /// - `Quantity` / `UnitPrice`: parsed; unparseable or non-finite → `0`
    /// - Unknown id: no-op
    ///
    /// ## Returns
    /// `true` if a row was updated.
    pub fn update_item(&mut self, id: &LineItemId, field: LineItemField, raw: &str) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id = %id, ?field, "update for unknown line item ignored");
            return false;
        };

        Arc::make_mut(&mut self.items)[index].apply(field, raw);
        true
    }

    /// Removes the row with `id`.
    ///
    /// ## Returns
    /// `true` if a row was removed; unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "remove for unknown line item ignored");
            return false;
        };

        Arc::make_mut(&mut self.items).remove(index);
        true
    }

    /// Looks up a row by id.
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Shared handle to the current collection. Later edits don't affect it.
    pub fn snapshot(&self) -> Arc<Vec<LineItem>> {
        Arc::clone(&self.items)
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

impl Default for LineItemStore {
    fn default() -> Self {
        LineItemStore::new(Box::new(SequentialIds::new()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
