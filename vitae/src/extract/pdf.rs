use std::path::Path;

use tracing::debug;

use crate::error::{Result, VitaeError};
use crate::models::DocumentFormat;

use super::TextProvider;

/// Primary PDF backend: renders the text layer of the whole document in
/// page order.
pub struct PdfExtractProvider;

impl TextProvider for PdfExtractProvider {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn extract(&self, _path: &Path, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| VitaeError::Extraction {
            format: DocumentFormat::Pdf,
            message: format!("PDF text extraction failed: {e}"),
        })
    }
}

/// Fallback PDF backend: walks the page tree and concatenates per-page text.
/// Pages whose content streams cannot be decoded are skipped rather than
/// failing the document.
pub struct LopdfProvider;

impl TextProvider for LopdfProvider {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn extract(&self, _path: &Path, bytes: &[u8]) -> Result<String> {
        let document = lopdf::Document::load_mem(bytes).map_err(|e| VitaeError::Extraction {
            format: DocumentFormat::Pdf,
            message: format!("PDF parse error: {e}"),
        })?;

        let mut text = String::new();
        for (page_number, _) in document.get_pages() {
            match document.extract_text(&[page_number]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    debug!(page = page_number, "Skipping unreadable PDF page: {e}");
                }
            }
        }

        Ok(text)
    }
}
