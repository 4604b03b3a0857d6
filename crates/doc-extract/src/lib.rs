//! Document text extraction
//!
//! Converts uploaded contract documents (PDF or DOCX) into a single plain
//! text string for rule evaluation. Parsing is one-shot: either the full
//! document text is produced or extraction fails; there are no partial
//! results and no retries.

mod docx;
mod error;
mod pdf;

pub use error::ExtractError;

/// MIME type for PDF uploads.
pub const MIME_PDF: &str = "application/pdf";

/// MIME type for Word (.docx) uploads.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extract plain text from a document byte stream.
///
/// Dispatches on the declared MIME type; anything other than PDF or DOCX
/// is rejected with [`ExtractError::UnsupportedFormat`].
pub fn extract_text(bytes: &[u8], mime_type: &str) -> Result<String, ExtractError> {
    match mime_type {
        MIME_PDF => pdf::extract(bytes),
        MIME_DOCX => docx::extract(bytes),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_mime_type() {
        let result = extract_text(b"hello", "text/plain");
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(t)) if t == "text/plain"));
    }

    #[test]
    fn test_rejects_missing_mime_type() {
        let result = extract_text(b"hello", "");
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }
}
