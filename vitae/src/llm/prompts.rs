//! Prompt templates for schema-constrained resume extraction.
//!
//! Plain `format!()` interpolation; missing variables fail at compile time.

/// System message framing the extraction task. The schema itself travels in
/// the request's response-format field, not here.
pub fn resume_system_prompt() -> String {
    "Extract the resume into a single JSON object that matches the schema exactly; \
     output only valid JSON."
        .to_string()
}

/// User message carrying the resume text plus the normalization rules the
/// schema cannot express.
///
/// # Example
/// ```
/// use vitae::llm::prompts::resume_user_prompt;
///
/// let prompt = resume_user_prompt("Jane Doe, software engineer");
/// assert!(prompt.contains("Jane Doe"));
/// assert!(prompt.contains("linkedin.com/in/"));
/// ```
pub fn resume_user_prompt(resume_text: &str) -> String {
    format!(
        r#"
Resume:
"""{resume_text}"""

Rules:
- Detect primary language as ISO-2 (e.g., 'en', 'de', 'tr'); default to 'en' if unclear.
- Normalize LinkedIn as 'linkedin.com/in/<handle>' when present.
- Use null for missing fields.
- Return ONLY valid JSON conforming to the provided schema.
"#
    )
}
