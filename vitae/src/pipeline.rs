use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::{Result, VitaeError};
use crate::extract::TextExtractor;
use crate::llm::{ExtractionClient, ResumeExtraction};

/// End-to-end driver: one document in, one structured JSON file out.
///
/// Holds no mutable state; independent invocations are safe to run
/// concurrently.
pub struct ParsePipeline {
    extractor: TextExtractor,
    client: Arc<dyn ResumeExtraction>,
}

impl ParsePipeline {
    /// Build a pipeline backed by the real extraction service. A missing
    /// credential surfaces here, before any document is touched.
    pub fn new(config: &Config) -> Result<Self> {
        let client = ExtractionClient::new(&config.llm)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Build a pipeline around a caller-supplied extraction backend.
    pub fn with_client(client: Arc<dyn ResumeExtraction>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            client,
        }
    }

    /// Parse `input` and write the structured record to `output_path`,
    /// returning the path on success.
    ///
    /// Steps run strictly in sequence and errors propagate unchanged; the
    /// write comes last, so no output file exists after a failure.
    pub async fn parse_document_to_json(
        &self,
        input: &Path,
        output_path: &Path,
    ) -> Result<PathBuf> {
        let text = self.extractor.extract_text(input)?;

        if text.trim().is_empty() {
            return Err(VitaeError::EmptyContent {
                path: input.to_path_buf(),
            });
        }

        info!(path = %input.display(), chars = text.len(), "Extracted document text");

        let record = self.client.extract_resume(&text).await?;

        let json = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(output_path, json).await?;

        info!(path = %output_path.display(), "Wrote structured resume");
        Ok(output_path.to_path_buf())
    }
}

/// Default output location for a parsed document: `<stem>_parsed.json`
/// next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    input.with_file_name(format!("{stem}_parsed.json"))
}
