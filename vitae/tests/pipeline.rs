mod common;

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use vitae::llm::ResumeExtraction;
use vitae::models::ResumeRecord;
use vitae::pipeline::ParsePipeline;
use vitae::{Result, VitaeError};

/// Canned extraction backend: returns a fixed record and remembers nothing.
struct StubExtraction {
    record: ResumeRecord,
}

#[async_trait]
impl ResumeExtraction for StubExtraction {
    async fn extract_resume(&self, _text: &str) -> Result<ResumeRecord> {
        Ok(self.record.clone())
    }
}

/// Extraction backend that always fails, for propagation tests.
struct FailingExtraction;

#[async_trait]
impl ResumeExtraction for FailingExtraction {
    async fn extract_resume(&self, _text: &str) -> Result<ResumeRecord> {
        Err(VitaeError::Api("extraction backend unavailable".to_string()))
    }
}

fn stub_pipeline() -> ParsePipeline {
    ParsePipeline::with_client(Arc::new(StubExtraction {
        record: common::sample_record(),
    }))
}

#[tokio::test]
async fn test_round_trip_writes_schema_valid_pretty_json() {
    let (dir, input) = common::write_temp_file("cv.txt", b"Jose Garcia\nBackend engineer");
    let output = dir.path().join("cv_parsed.json");

    let written = stub_pipeline()
        .parse_document_to_json(&input, &output)
        .await
        .unwrap();
    assert_eq!(written, output);

    let contents = std::fs::read_to_string(&output).unwrap();
    let parsed: ResumeRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, common::sample_record());

    // Pretty-printed, human-diffable output with raw UTF-8 (no \u escapes).
    assert_eq!(
        contents,
        serde_json::to_string_pretty(&common::sample_record()).unwrap()
    );
    assert!(contents.contains("José García"));
}

#[tokio::test]
async fn test_output_is_byte_identical_across_runs() {
    let (dir, input) = common::write_temp_file("cv.txt", b"Jose Garcia\nBackend engineer");
    let output = dir.path().join("cv_parsed.json");
    let pipeline = stub_pipeline();

    pipeline.parse_document_to_json(&input, &output).await.unwrap();
    let first = std::fs::read(&output).unwrap();

    pipeline.parse_document_to_json(&input, &output).await.unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_document_is_rejected_without_output() {
    let (dir, input) = common::write_temp_file("cv.txt", b"");
    let output = dir.path().join("cv_parsed.json");

    let err = stub_pipeline()
        .parse_document_to_json(&input, &output)
        .await
        .unwrap_err();

    assert!(
        matches!(err, VitaeError::EmptyContent { .. }),
        "Expected EmptyContent, got: {err}"
    );
    assert!(err.to_string().contains("consider OCR"));
    assert!(!output.exists(), "no output file may be left behind");
}

#[tokio::test]
async fn test_whitespace_only_document_is_rejected() {
    let (dir, input) = common::write_temp_file("cv.txt", b"  \n\t \r\n ");
    let output = dir.path().join("cv_parsed.json");

    let err = stub_pipeline()
        .parse_document_to_json(&input, &output)
        .await
        .unwrap_err();
    assert!(matches!(err, VitaeError::EmptyContent { .. }));
}

#[tokio::test]
async fn test_unsupported_input_passes_through_unchanged() {
    let (dir, input) = common::write_temp_file("cv.odt", b"irrelevant");
    let output = dir.path().join("cv_parsed.json");

    let err = stub_pipeline()
        .parse_document_to_json(&input, &output)
        .await
        .unwrap_err();

    assert!(
        matches!(err, VitaeError::UnsupportedFormat { ref extension } if extension == "odt"),
        "Expected UnsupportedFormat, got: {err}"
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn test_client_failure_leaves_no_partial_output() {
    let (dir, input) = common::write_temp_file("cv.txt", b"Jane Doe");
    let output = dir.path().join("cv_parsed.json");

    let pipeline = ParsePipeline::with_client(Arc::new(FailingExtraction));
    let err = pipeline.parse_document_to_json(&input, &output).await.unwrap_err();

    assert!(matches!(err, VitaeError::Api(_)), "Expected Api error, got: {err}");
    assert!(!output.exists());
}
