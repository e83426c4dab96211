//! # State Module
//!
//! Application state for the invoice controller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┬──────────────────────┐                │
//! │          ▼                      ▼                                       │
//! │  ┌──────────────────┐  ┌──────────────────────┐                        │
//! │  │  DocumentState   │  │    ConfigState       │                        │
//! │  │                  │  │                      │                        │
//! │  │  Arc<Mutex<      │  │  issuer defaults     │                        │
//! │  │   InvoiceDoc     │  │  tax rate, due days  │                        │
//! │  │  >>              │  │  id strategy         │                        │
//! │  └──────────────────┘  └──────────────────────┘                        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DocumentState: Arc<Mutex<T>>, one writer at a time                  │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod document;

pub use config::{ConfigState, IdStrategy};
pub use document::DocumentState;
