use serde::{Deserialize, Serialize};

/// One position held, as reported in the resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Vec<String>,
}

/// One education entry; every field may be null when the resume omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub field: Option<String>,
}

/// The structured record produced by the extraction service.
///
/// Field declaration order is the serialized key order. Every key is
/// required on deserialization: `Option` fields deliberately carry no
/// `#[serde(default)]`, so an explicit `null` maps to `None` while a
/// missing key is an error. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResumeRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certificates: Vec<String>,
    pub languages: Vec<String>,
    pub detected_language: String,
}

impl ResumeRecord {
    /// Coerce `detected_language` to a two-letter lowercase code.
    ///
    /// The schema can only require a string, and the prompt merely asks for
    /// ISO-2, so anything else the model returns ("English", "unknown", "")
    /// falls back to `"en"`.
    pub fn normalize_language(&mut self) {
        let language = self.detected_language.trim();
        if language.len() == 2 && language.chars().all(|c| c.is_ascii_alphabetic()) {
            self.detected_language = language.to_ascii_lowercase();
        } else {
            self.detected_language = "en".to_string();
        }
    }
}
