use std::env;

use serde::Deserialize;

/// Model used when `VITAE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
}

/// Connection settings for the schema-constrained extraction service.
///
/// The credential is carried here and handed to the client constructor;
/// nothing reads the environment past `Config::from_env()`.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    /// OpenAI-compatible endpoint override. `None` means the service default.
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: env::var("VITAE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                api_key: env::var("OPENAI_API_KEY").ok(),
                base_url: env::var("VITAE_BASE_URL").ok(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
