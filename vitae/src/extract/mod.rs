mod doc;
mod docx;
mod pdf;
mod txt;

pub use doc::{AntiwordProvider, CatdocProvider};
pub use docx::DocxProvider;
pub use pdf::{LopdfProvider, PdfExtractProvider};

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, VitaeError};
use crate::models::DocumentFormat;

/// One extraction backend for a document format.
///
/// Backends are tried lazily in registration order; `is_available` is only
/// consulted once a document of the matching format arrives.
pub trait TextProvider: Send + Sync {
    /// Short name used in logs and `MissingCapability` messages.
    fn name(&self) -> &'static str;

    /// Whether the backend can run at all (external tool installed, etc.).
    fn is_available(&self) -> bool;

    /// Extract text from the document. `bytes` is the full file content,
    /// read once by the dispatcher; `path` is passed through for backends
    /// that shell out to external tools.
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String>;
}

/// Extension-dispatched text extraction over ordered provider lists.
pub struct TextExtractor {
    pdf: Vec<Box<dyn TextProvider>>,
    docx: Vec<Box<dyn TextProvider>>,
    doc: Vec<Box<dyn TextProvider>>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self {
            pdf: vec![Box::new(PdfExtractProvider), Box::new(LopdfProvider)],
            docx: vec![Box::new(DocxProvider)],
            doc: vec![Box::new(AntiwordProvider), Box::new(CatdocProvider)],
        }
    }

    /// Extract the raw text of `path`, dispatching on its extension alone.
    ///
    /// Read errors (missing file, permissions) surface before any backend
    /// runs. Plain text never goes through a provider list: decoding it
    /// cannot fail.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), %format, size = bytes.len(), "Extracting text");

        match format {
            DocumentFormat::Pdf => self.run_providers(&self.pdf, format, path, &bytes),
            DocumentFormat::Docx => self.run_providers(&self.docx, format, path, &bytes),
            DocumentFormat::Doc => self.run_providers(&self.doc, format, path, &bytes),
            DocumentFormat::Txt => Ok(txt::decode(&bytes)),
        }
    }

    /// Try each provider in order: skip unavailable ones, return the first
    /// success, keep the most recent failure. When nothing was available at
    /// all, report what could be installed.
    fn run_providers(
        &self,
        providers: &[Box<dyn TextProvider>],
        format: DocumentFormat,
        path: &Path,
        bytes: &[u8],
    ) -> Result<String> {
        let mut last_error = None;

        for provider in providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), %format, "Backend unavailable, skipping");
                continue;
            }

            match provider.extract(path, bytes) {
                Ok(text) => {
                    debug!(provider = provider.name(), chars = text.len(), "Extraction succeeded");
                    return Ok(text);
                }
                Err(error) => {
                    warn!(provider = provider.name(), %error, "Extraction failed, trying next backend");
                    last_error = Some(error);
                }
            }
        }

        match last_error {
            Some(error) => Err(error),
            None => Err(VitaeError::MissingCapability {
                format,
                providers: providers
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
