//! # Invoice Studio Controller
//!
//! Owns the live invoice and exposes the commands a presentation surface
//! (web view, TUI, native window) calls while the user edits.
//!
//! ## Module Organization
//! ```text
//! invoice_app/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── document.rs ◄─── Shared live document
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── document.rs ◄─── Item / metadata / tax commands
//! │   ├── logo.rs     ◄─── Async logo upload
//! │   ├── print.rs    ◄─── Print hand-off
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! invoice_app::init_tracing();
//! let app = invoice_app::App::start();
//!
//! let added = commands::document::add_item(&app.document);
//! commands::document::update_item(&app.document, added.id.as_str(), LineItemField::UnitPrice, "150");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use invoice_core::InvoiceDocument;
use state::{ConfigState, DocumentState};

/// Running controller: the live document plus the config it was seeded from.
#[derive(Debug, Clone)]
pub struct App {
    pub document: DocumentState,
    pub config: ConfigState,
}

impl App {
    /// Starts the controller.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Controller Startup                                │
    /// │                                                                         │
    /// │  1. Load Configuration ───────────────────────────────────────────────► │
    /// │     • INVOICE_* environment variables over defaults                     │
    /// │                                                                         │
    /// │  2. Read the Clock ───────────────────────────────────────────────────► │
    /// │     • Local date becomes the issue date; due date = issue + N days      │
    /// │                                                                         │
    /// │  3. Seed the Document ────────────────────────────────────────────────► │
    /// │     • Random invoice number, issuer defaults, one starter row           │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn start() -> Self {
        let today = chrono::Local::now().date_naive();
        App::with_config(ConfigState::from_env(), today)
    }

    /// Starts with explicit configuration and issue date.
    pub fn with_config(config: ConfigState, today: NaiveDate) -> Self {
        let seed = config.seed(today, &mut rand::thread_rng());
        info!(
            invoice_number = %seed.invoice_number,
            issue_date = %today,
            "Starting Invoice Studio"
        );

        let document = InvoiceDocument::seeded(seed, config.id_strategy.generator());

        App {
            document: DocumentState::new(document),
            config,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=invoice_core=trace` - Show number coercion fallbacks
/// - Default: INFO, DEBUG for the invoice crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,invoice_core=debug,invoice_app=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
