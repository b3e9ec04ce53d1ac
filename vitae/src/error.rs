use std::path::PathBuf;

use thiserror::Error;

use crate::models::DocumentFormat;

#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("Unsupported file type: {extension:?} (supported: .pdf, .docx, .doc, .txt)")]
    UnsupportedFormat { extension: String },

    #[error("No {format} extraction backend available (install one of: {providers})")]
    MissingCapability {
        format: DocumentFormat,
        providers: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No text extracted from {} (consider OCR for scanned PDFs)", .path.display())]
    EmptyContent { path: PathBuf },

    #[error("{format} extraction error: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },

    #[error("Model response is not valid resume JSON: {source}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Extraction service error: {0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VitaeError>;
