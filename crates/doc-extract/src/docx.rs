//! DOCX text extraction
//!
//! A .docx file is a zip archive; the document body lives in
//! `word/document.xml` (WordprocessingML). Text runs sit inside `w:t`
//! elements; each paragraph (`w:p`) ends with a newline separator, so an
//! empty paragraph contributes only the separator.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Extract text from DOCX bytes, one paragraph at a time in document order.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    extract_paragraphs(&xml)
}

fn extract_paragraphs(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"t" => in_text_run = false,
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| ExtractError::Parse(e.to_string()))?;
                text.push_str(&run);
            }
            // Paragraph boundary; self-closing covers empty paragraphs
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => text.push('\n'),
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Parse(e.to_string())),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for p in paragraphs {
            if p.is_empty() {
                body.push_str("<w:p/>");
            } else {
                body.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
            }
        }
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let bytes = build_docx(&["A", "B"]);
        assert_eq!(extract(&bytes).unwrap(), "A\nB\n");
    }

    #[test]
    fn test_empty_paragraph_contributes_only_separator() {
        let bytes = build_docx(&["A", "B", ""]);
        assert_eq!(extract(&bytes).unwrap(), "A\nB\n\n");
    }

    #[test]
    fn test_split_text_runs_are_concatenated() {
        let xml = "<w:document xmlns:w=\"ns\"><w:body>\
                   <w:p><w:r><w:t>Governing </w:t></w:r><w:r><w:t>Law</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(extract_paragraphs(xml).unwrap(), "Governing Law\n");
    }

    #[test]
    fn test_malformed_bytes_fail_with_parse_error() {
        let result = extract(b"not a zip archive");
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn test_zip_without_document_xml_fails() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("unrelated.txt", options).unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = extract(&bytes);
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
