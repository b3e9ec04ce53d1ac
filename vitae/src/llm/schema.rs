use serde_json::{json, Value};

/// Name the schema is registered under in the structured-output request.
pub const SCHEMA_NAME: &str = "ResumeSchema";

/// The JSON schema enforced on the model's output.
///
/// Every object level lists all of its keys as required and forbids
/// additional properties; optionality is expressed through nullable value
/// types, never through omitted keys. This is the shape
/// [`crate::models::ResumeRecord`] deserializes.
pub fn resume_json_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "name": { "type": "string" },
            "email": { "type": ["string", "null"] },
            "phone": { "type": ["string", "null"] },
            "linkedin": { "type": ["string", "null"] },
            "summary": { "type": ["string", "null"] },
            "skills": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 0
            },
            "experience": {
                "type": "array",
                "minItems": 0,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "position": { "type": "string" },
                        "company": { "type": ["string", "null"] },
                        "duration": { "type": ["string", "null"] },
                        "description": {
                            "type": "array",
                            "items": { "type": "string" },
                            "minItems": 0
                        }
                    },
                    "required": ["position", "company", "duration", "description"]
                }
            },
            "education": {
                "type": "array",
                "minItems": 0,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "degree": { "type": ["string", "null"] },
                        "institution": { "type": ["string", "null"] },
                        "year": { "type": ["string", "null"] },
                        "field": { "type": ["string", "null"] }
                    },
                    "required": ["degree", "institution", "year", "field"]
                }
            },
            "certificates": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 0
            },
            "languages": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 0
            },
            "detected_language": { "type": "string" }
        },
        "required": [
            "name",
            "email",
            "phone",
            "linkedin",
            "summary",
            "skills",
            "experience",
            "education",
            "certificates",
            "languages",
            "detected_language"
        ]
    })
}
