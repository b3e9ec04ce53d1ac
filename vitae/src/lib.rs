//! Turn resume documents (PDF, DOCX, legacy DOC, plain text) into
//! schema-validated JSON records via LLM structured output.
//!
//! The flow is a single sequential chain per document: extract the raw
//! text, hand it to a schema-constrained chat completion, and write the
//! resulting [`models::ResumeRecord`] to disk as pretty-printed UTF-8 JSON.

pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod models;
pub mod pipeline;

pub use error::{Result, VitaeError};
pub use pipeline::ParsePipeline;
