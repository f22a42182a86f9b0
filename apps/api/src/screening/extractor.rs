//! Text Extractor: flattens an uploaded resume into one string.
//!
//! PDFs are read page by page with lopdf; a page that yields no text (scanned
//! image, undecodable content stream) is skipped rather than failing the whole
//! document. Plain text is decoded as UTF-8.

use lopdf::Document as PdfDocument;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::document::{Document, DocumentKind};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document unreadable ({kind}): {reason}")]
    DocumentUnreadable { kind: DocumentKind, reason: String },
}

/// The extraction seam. Implement this to swap backends without touching
/// the batch screening or handler code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &Document) -> Result<String, ExtractError>;
}

/// Default extractor: lopdf for PDFs, strict UTF-8 for plain text.
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractError> {
        match document.kind {
            DocumentKind::Pdf => extract_pdf_text(&document.bytes),
            DocumentKind::PlainText => decode_plain_text(&document.bytes),
        }
    }
}

/// Concatenates the text of every page in page order, one page per line group.
///
/// Trailing whitespace of each page is trimmed before pages are joined with a
/// single `\n`, so the result never ends with a newline. Whitespace-only pages
/// are treated as empty and skipped.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = PdfDocument::load_mem(bytes).map_err(|e| ExtractError::DocumentUnreadable {
        kind: DocumentKind::Pdf,
        reason: e.to_string(),
    })?;

    // get_pages() is keyed by 1-based page number, so iteration is page order
    let pages = doc.get_pages();
    let mut page_texts = Vec::with_capacity(pages.len());

    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) if !text.trim().is_empty() => page_texts.push(text.trim_end().to_string()),
            Ok(_) => debug!("Page {page_number} has no extractable text, skipping"),
            Err(e) => warn!("Failed to extract text from page {page_number}: {e}"),
        }
    }

    debug!(
        "Extracted text from {} of {} PDF pages",
        page_texts.len(),
        pages.len()
    );
    Ok(page_texts.join("\n"))
}

pub fn decode_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ExtractError::DocumentUnreadable {
            kind: DocumentKind::PlainText,
            reason: e.to_string(),
        })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds an in-memory PDF with one page per entry. `None` produces a
    /// page with an empty content stream (no text at all).
    pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn test_plain_text_is_returned_verbatim() {
        let doc = Document::new(
            "cv.txt",
            DocumentKind::PlainText,
            "Education: 60%\nSkills: Python".as_bytes().to_vec(),
        );
        let text = DocumentTextExtractor.extract(&doc).unwrap();
        assert_eq!(text, "Education: 60%\nSkills: Python");
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let doc = Document::new("cv.txt", DocumentKind::PlainText, vec![0xffu8, 0xfe, 0x41]);
        let err = DocumentTextExtractor.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::DocumentUnreadable {
                kind: DocumentKind::PlainText,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_plain_text_is_empty_string() {
        let doc = Document::new("cv.txt", DocumentKind::PlainText, Vec::<u8>::new());
        assert_eq!(DocumentTextExtractor.extract(&doc).unwrap(), "");
    }

    #[test]
    fn test_corrupt_pdf_is_unreadable() {
        let doc = Document::new("cv.pdf", DocumentKind::Pdf, b"this is not a pdf".to_vec());
        let err = DocumentTextExtractor.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::DocumentUnreadable {
                kind: DocumentKind::Pdf,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Document unreadable (pdf)"));
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let bytes = pdf_with_pages(&[Some("Skills: python and java")]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("python and java"), "got {text:?}");
    }

    #[test]
    fn test_pdf_pages_keep_order_and_join_with_newline() {
        let bytes = pdf_with_pages(&[Some("first page"), Some("second page")]);
        let text = extract_pdf_text(&bytes).unwrap();
        let first = text.find("first page").expect("first page missing");
        let second = text.find("second page").expect("second page missing");
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
    }

    #[test]
    fn test_pdf_blank_pages_are_skipped() {
        let bytes = pdf_with_pages(&[None, Some("only words"), None]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("only words"));
        assert!(!text.starts_with('\n'));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_pdf_without_text_is_empty_not_an_error() {
        let bytes = pdf_with_pages(&[None, None]);
        assert_eq!(extract_pdf_text(&bytes).unwrap(), "");
    }
}
