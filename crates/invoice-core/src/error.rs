//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                       │
//! │  ├── CoreError        - Logo decoding failures                         │
//! │  └── ValidationError  - Raw field text that doesn't parse              │
//! │                                                                         │
//! │  invoice-app errors (in app)                                           │
//! │  └── ApiError         - File / task failures (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → (coerced to a default, never surfaced)        │
//! │        CoreError → warn! log, logo left unchanged                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion, Not Rejection
//! Every edit the user makes must land. Parsers return these errors, but the
//! public mutation paths swallow them and substitute the safe default:
//! `0` for numbers, a placeholder for dates, no update for a bad logo.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Uploaded bytes are not an image we know how to display.
    #[error("Unrecognized image format{}", .file_name.as_deref().map(|n| format!(": {}", n)).unwrap_or_default())]
    UnrecognizedImage { file_name: Option<String> },

    /// Uploaded file was empty.
    #[error("Image data is empty")]
    EmptyImage,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw input that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text does not start with a number.
    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    /// Text parsed, but to infinity or NaN.
    #[error("'{value}' is not a finite number")]
    NonFinite { value: String },

    /// Text is not an ISO calendar date (YYYY-MM-DD).
    #[error("'{value}' is not a valid date")]
    InvalidDate { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
