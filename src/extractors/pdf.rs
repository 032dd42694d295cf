// src/extractors/pdf.rs
use crate::utils::error::ExtractError;
use lopdf::Document;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Converts downloaded statement bytes into plain text.
pub trait TextExtractor {
    /// Returns the text of every page concatenated in page order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError>;

    fn backend_name(&self) -> &str;
}

/// Layout-aware extraction backed by `pdf-extract`.
///
/// Glyphs are placed by their text-space position: runs on one baseline are joined
/// with a space and a drop to a lower baseline starts a new line, so each table row
/// comes out as one line.
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub fn new() -> Self { Self {} }
}

impl Default for PdfExtractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError> {
        let page_count = Document::load_mem(pdf_bytes)
            .map_err(|e| ExtractError::PdfLoad(e.to_string()))?
            .get_pages()
            .len();

        // pdf-extract panics on some malformed fonts and content streams
        let pages = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)))
            .map_err(|_| ExtractError::PdfLoad("pdf-extract panicked while reading the document".to_string()))?
            .map_err(|e| ExtractError::PdfLoad(e.to_string()))?;

        // A page that fails to decode ends pdf-extract's page walk
        if pages.len() < page_count {
            tracing::warn!(
                "Text stopped at page {} of {}; the remaining pages were skipped",
                pages.len() + 1,
                page_count
            );
        }

        // Pages are appended with no separator; a page without text adds nothing
        let text: String = pages.concat();

        tracing::debug!("Extracted {} characters from {} page(s)", text.len(), pages.len());
        Ok(text)
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
