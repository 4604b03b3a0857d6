//! PDF text extraction
//!
//! Primary pass walks the page tree with `lopdf` so text is gathered in
//! page order. Some generators produce streams `lopdf` extracts poorly; if
//! the primary pass yields only whitespace for a non-empty document, a
//! second pass with `pdf-extract` is attempted on the same bytes.

use crate::error::ExtractError;
use lopdf::Document;

/// Extract text from PDF bytes, one page at a time in page order.
///
/// A page with no extractable text (scanned image, empty page) contributes
/// an empty string; extraction never fails solely because a page is empty.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(ExtractError::PasswordProtected);
    }

    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    for (page_num, _page_id) in pages {
        let content = doc.extract_text(&[page_num]).unwrap_or_default();
        text.push_str(&content);
        text.push('\n');
    }

    // Fallback pass for documents lopdf cannot decode
    if page_count > 0 && text.trim().is_empty() {
        if let Ok(fallback) = pdf_extract::extract_text_from_mem(bytes) {
            if !fallback.trim().is_empty() {
                return Ok(fallback);
            }
        }
    }

    Ok(text)
}
