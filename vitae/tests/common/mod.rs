use std::path::PathBuf;

use tempfile::TempDir;

use vitae::models::{EducationEntry, ExperienceEntry, ResumeRecord};

/// Write `bytes` to `name` inside a fresh temp dir. The dir handle must be
/// kept alive for as long as the file is used.
pub fn write_temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write temp file");
    (dir, path)
}

/// A complete, schema-valid record with every field class exercised:
/// non-ASCII text, explicit nulls, and empty arrays.
pub fn sample_record() -> ResumeRecord {
    ResumeRecord {
        name: "José García".to_string(),
        email: Some("jose.garcia@example.com".to_string()),
        phone: None,
        linkedin: Some("linkedin.com/in/josegarcia".to_string()),
        summary: Some("Backend engineer focused on distributed systems.".to_string()),
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        experience: vec![ExperienceEntry {
            position: "Senior Engineer".to_string(),
            company: Some("Acme Corp".to_string()),
            duration: Some("2019-2024".to_string()),
            description: vec![
                "Led the storage team.".to_string(),
                "Cut p99 latency in half.".to_string(),
            ],
        }],
        education: vec![EducationEntry {
            degree: Some("BSc".to_string()),
            institution: Some("Universidad de Sevilla".to_string()),
            year: Some("2014".to_string()),
            field: None,
        }],
        certificates: vec![],
        languages: vec!["Spanish".to_string(), "English".to_string()],
        detected_language: "es".to_string(),
    }
}
