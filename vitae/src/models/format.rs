use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaeError};

/// Document formats the extractor knows how to dispatch on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Txt,
}

impl DocumentFormat {
    /// Determine the format from a path's extension, case-insensitively.
    ///
    /// A missing or unrecognized extension is `UnsupportedFormat`; the file
    /// content is never inspected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        extension
            .parse()
            .map_err(|_| VitaeError::UnsupportedFormat { extension })
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::Doc => write!(f, "doc"),
            Self::Txt => write!(f, "txt"),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "doc" => Ok(Self::Doc),
            "txt" => Ok(Self::Txt),
            _ => Err(format!("Unknown document format: {s}")),
        }
    }
}
