//! # Logo Encoding
//!
//! Turns uploaded image bytes into a [`Logo`] the frontend can display.
//!
//! Reading the file is the app's job; this module only looks at bytes.
//! The MIME type comes from the file's magic number, not its extension.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{CoreError, CoreResult};
use crate::types::Logo;

/// How far into a text file to look for an `<svg` tag.
const SVG_SNIFF_LEN: usize = 1024;

/// Builds a `data:` URL logo from raw image bytes.
///
/// ## Errors
/// - [`CoreError::EmptyImage`] for zero bytes
/// - [`CoreError::UnrecognizedImage`] when the bytes aren't a known image type
///
/// ## Example
/// ```rust
/// use invoice_core::logo::encode_logo;
///
/// let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
/// let logo = encode_logo(&png, Some("logo.png")).unwrap();
/// assert_eq!(logo.mime_type, "image/png");
/// assert!(logo.data_url.starts_with("data:image/png;base64,"));
///
/// assert!(encode_logo(b"hello", Some("notes.txt")).is_err());
/// ```
pub fn encode_logo(bytes: &[u8], file_name: Option<&str>) -> CoreResult<Logo> {
    if bytes.is_empty() {
        return Err(CoreError::EmptyImage);
    }

    let mime_type = sniff_image_mime(bytes).ok_or_else(|| CoreError::UnrecognizedImage {
        file_name: file_name.map(str::to_string),
    })?;

    Ok(Logo {
        mime_type: mime_type.to_string(),
        data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
    })
}

/// Identifies common web image formats by their leading bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
    const ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00];

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(JPEG) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") && bytes.len() >= 14 {
        Some("image/bmp")
    } else if bytes.starts_with(ICO) {
        Some("image/x-icon")
    } else if looks_like_svg(bytes) {
        Some("image/svg+xml")
    } else {
        None
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SVG_SNIFF_LEN)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with('<') && text.to_ascii_lowercase().contains("<svg")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_known_formats() {
        assert_eq!(
            sniff_image_mime(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
            Some("image/png")
        );
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"GIF89a...."), Some("image/gif"));
        assert_eq!(sniff_image_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"BM\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00"), Some("image/bmp"));
        assert_eq!(
            sniff_image_mime(b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
            Some("image/svg+xml")
        );
        assert_eq!(sniff_image_mime(b"  <SVG></SVG>"), Some("image/svg+xml"));
    }

    #[test]
    fn test_sniff_rejects_non_images() {
        assert_eq!(sniff_image_mime(b"hello world"), None);
        assert_eq!(sniff_image_mime(b"%PDF-1.7"), None);
        assert_eq!(sniff_image_mime(b"<html><body></body></html>"), None);
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8]), None);
    }

    #[test]
    fn test_encode_logo_data_url() {
        let bytes = b"GIF89a\x01\x00\x01\x00";
        let logo = encode_logo(bytes, None).unwrap();
        assert_eq!(logo.mime_type, "image/gif");
        assert_eq!(
            logo.data_url,
            format!("data:image/gif;base64,{}", STANDARD.encode(bytes))
        );
    }

    #[test]
    fn test_encode_logo_errors() {
        assert!(matches!(encode_logo(&[], None), Err(CoreError::EmptyImage)));
        assert!(matches!(
            encode_logo(b"plain text", Some("readme.txt")),
            Err(CoreError::UnrecognizedImage { file_name: Some(name) }) if name == "readme.txt"
        ));
    }
}
