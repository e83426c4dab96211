//! # Logo Commands
//!
//! Upload and clear the issuer logo.
//!
//! ## Upload Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  upload_logo(path)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tokio::spawn ──► fs::read(path)      (no lock held while reading)     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   encode_logo(bytes)                                    │
//! │                        │                                                │
//! │              ┌─────────┴─────────┐                                      │
//! │              ▼                   ▼                                      │
//! │          Ok(logo)          not an image                                 │
//! │     one locked set_logo    warn!, document untouched, Ok(document)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A file that isn't an image is not an error: the upload is dropped with a
//! warning and the unchanged document comes back. Only an unreadable file or
//! a failed task is reported as an [`ApiError`].
//!
//! Overlapping uploads are not cancelled: each one that succeeds sets the
//! logo when it finishes, so the last to complete is what stays.

use std::path::PathBuf;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::commands::DocumentResponse;
use crate::error::ApiError;
use crate::state::DocumentState;
use invoice_core::logo::encode_logo;

/// Starts reading `path` in the background and sets it as the logo.
///
/// Must be called from within a tokio runtime. The returned handle can be
/// awaited (see [`wait_for_upload`]) or dropped; dropping it does not cancel
/// the upload.
pub fn upload_logo(
    state: &DocumentState,
    path: PathBuf,
) -> JoinHandle<Result<DocumentResponse, ApiError>> {
    debug!(path = %path.display(), "upload_logo command");

    let state = state.clone();
    tokio::spawn(async move {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            warn!(path = %path.display(), error = %e, "could not read logo file");
            ApiError::from(e)
        })?;

        Ok(upload_logo_bytes(&state, &bytes, file_name.as_deref()))
    })
}

/// Awaits a background upload, flattening task failures into [`ApiError`].
pub async fn wait_for_upload(
    handle: JoinHandle<Result<DocumentResponse, ApiError>>,
) -> Result<DocumentResponse, ApiError> {
    handle.await?
}

/// Sets the logo from bytes already in memory.
///
/// Bytes that aren't a recognized image leave the current logo in place.
pub fn upload_logo_bytes(
    state: &DocumentState,
    bytes: &[u8],
    file_name: Option<&str>,
) -> DocumentResponse {
    state.with_document_mut(|doc| {
        match encode_logo(bytes, file_name) {
            Ok(logo) => {
                debug!(mime_type = %logo.mime_type, size = bytes.len(), "logo accepted");
                doc.set_logo(Some(logo));
            }
            Err(e) => warn!(file_name, error = %e, "rejected logo upload"),
        }
        DocumentResponse::from(&*doc)
    })
}

/// Removes the logo.
pub fn clear_logo(state: &DocumentState) -> DocumentResponse {
    debug!("clear_logo command");

    state.with_document_mut(|doc| {
        doc.set_logo(None);
        DocumentResponse::from(&*doc)
    })
}
