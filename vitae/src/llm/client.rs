use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse, ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::error::{Result, VitaeError};
use crate::llm::prompts::{resume_system_prompt, resume_user_prompt};
use crate::llm::schema::{resume_json_schema, SCHEMA_NAME};
use crate::models::ResumeRecord;

/// Turns raw resume text into a [`ResumeRecord`].
///
/// The pipeline holds this as a trait object so tests can substitute a
/// canned backend for the remote service.
#[async_trait]
pub trait ResumeExtraction: Send + Sync {
    async fn extract_resume(&self, text: &str) -> Result<ResumeRecord>;
}

/// Schema-constrained extraction over an OpenAI-compatible chat endpoint.
///
/// One request per invocation: no retries, no local state, no timeout
/// beyond the transport's defaults.
#[derive(Debug)]
pub struct ExtractionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ExtractionClient {
    /// Build a client from explicit configuration.
    ///
    /// Fails before any network traffic when the credential is missing or
    /// blank.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                VitaeError::Configuration("OPENAI_API_KEY not set in environment".to_string())
            })?;

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key.to_string());
        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url.clone());
        }

        // async-openai retries transient failures with exponential backoff
        // for up to 15 minutes by default. Extraction is a single-shot call,
        // so the retry window is collapsed to zero.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config).with_backoff(backoff);

        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    fn build_request(&self, text: &str) -> Result<CreateChatCompletionRequest> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(resume_system_prompt())
                .build()
                .map_err(|e| VitaeError::Api(format!("Invalid system message: {e}")))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(resume_user_prompt(text))
                .build()
                .map_err(|e| VitaeError::Api(format!("Invalid user message: {e}")))?
                .into(),
        ];

        let response_format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: SCHEMA_NAME.to_string(),
                schema: Some(resume_json_schema()),
                strict: Some(true),
            },
        };

        CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .response_format(response_format)
            .temperature(0.0)
            .build()
            .map_err(|e| VitaeError::Api(format!("Invalid extraction request: {e}")))
    }

    fn extract_content(response: CreateChatCompletionResponse) -> Result<String> {
        Ok(response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| VitaeError::Api("Model response contained no choices".to_string()))?
            .message
            .content
            .unwrap_or_default())
    }

    fn map_openai_error(error: OpenAIError) -> VitaeError {
        match error {
            OpenAIError::ApiError(api_error) => {
                VitaeError::Api(format!("Extraction API error: {api_error}"))
            }
            OpenAIError::Reqwest(reqwest_error) => {
                VitaeError::Api(format!("Extraction request failed: {reqwest_error}"))
            }
            OpenAIError::JSONDeserialize(e) => {
                VitaeError::Api(format!("Malformed completion envelope: {e}"))
            }
            other => VitaeError::Api(other.to_string()),
        }
    }
}

#[async_trait]
impl ResumeExtraction for ExtractionClient {
    async fn extract_resume(&self, text: &str) -> Result<ResumeRecord> {
        let request = self.build_request(text)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(Self::map_openai_error)?;

        let content = Self::extract_content(response)?;
        tracing::debug!(response_len = content.len(), "Structured extraction response received");

        let mut record: ResumeRecord =
            serde_json::from_str(&content).map_err(|source| VitaeError::MalformedResponse {
                raw: content.clone(),
                source,
            })?;

        record.normalize_language();
        Ok(record)
    }
}
