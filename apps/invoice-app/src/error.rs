//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Invoice Studio                         │
//! │                                                                         │
//! │  Field edits ─────────► never fail (coerced in invoice-core)            │
//! │                                                                         │
//! │  upload_logo(path)                                                      │
//! │         │                                                               │
//! │         ├── file unreadable? ─── io::Error ─────────┐                  │
//! │         │                                           ▼                  │
//! │         ├── not an image? ────── warn!, no update   ApiError ──► host  │
//! │         │                                           ▲                  │
//! │         └── task aborted? ────── JoinError ─────────┘                  │
//! │                                                                         │
//! │  A failed upload leaves the document untouched.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors carry a machine-readable `code` and a human-readable `message`.

use serde::Serialize;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "IO_ERROR",
///   "message": "Could not read file: No such file or directory (os error 2)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// File could not be read
    IoError,

    /// Background task failed
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::new(ErrorCode::IoError, format!("Could not read file: {}", err))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Logo upload task failed: {}", err);
        ApiError::internal("Logo upload did not complete")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ApiError = io.into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("missing"));
    }

    #[tokio::test]
    async fn test_join_error_mapping() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_err = handle.await.unwrap_err();

        let err: ApiError = join_err.into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::internal("task gone");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(json["message"], "task gone");
        assert_eq!(err.to_string(), "[Internal] task gone");
    }
}
