//! # Commands Module
//!
//! Every operation the presentation surface can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── document.rs  ◄─── Line items, metadata, tax rate, new invoice
//! ├── logo.rs      ◄─── Async logo upload / clear
//! ├── print.rs     ◄─── Hand the rendered view to the host's print facility
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend edit (keystroke, button)                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::document::update_item(&state, id, field, raw)                │
//! │         │                                                               │
//! │         │  one lock: mutate + snapshot + view                           │
//! │         ▼                                                               │
//! │  DocumentResponse { snapshot, view } ──► re-render                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod config;
pub mod document;
pub mod logo;
pub mod print;

pub use document::{AddItemResponse, DocumentResponse};
