use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    error::{PlannerError, Result},
    services::llm_client::{ChatCompletionRequest, LlmClient},
};

/// Produces one free-text advisory reply for a role instruction and a user
/// message. The seam exists so planning logic can be exercised against a
/// scripted service in tests.
#[async_trait]
pub trait AdvisoryService: Send + Sync + fmt::Debug {
    async fn generate_reply(&self, instructions: &str, message: &str) -> Result<String>;
}

/// AdvisoryService backed by an OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct LlmAdvisoryService {
    client: LlmClient,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    timeout: Duration,
}

impl LlmAdvisoryService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: LlmClient::new(api_key),
            model: "openai/gpt-4.1-mini".to_string(),
            max_tokens: Some(1000),
            temperature: Some(0.3),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            PlannerError::Config(
                "OPENAI_API_KEY environment variable must be set before creating an advisory service"
                    .to_string(),
            )
        })?;
        let mut service = Self::new(api_key);
        if let Ok(base_url) =
            std::env::var("OPENAI_BASE_URL").or_else(|_| std::env::var("OPENROUTER_BASE_URL"))
        {
            service.client.set_base_url(base_url);
        }
        Ok(service)
    }
}

#[async_trait]
impl AdvisoryService for LlmAdvisoryService {
    async fn generate_reply(&self, instructions: &str, message: &str) -> Result<String> {
        let messages = vec![
            json!({
                "role": "system",
                "content": instructions
            }),
            json!({
                "role": "user",
                "content": message
            }),
        ];

        let body = ChatCompletionRequest::new(&self.model, messages)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .into_value();

        let response = self.client.chat_completion(&body, self.timeout).await?;

        let content = response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|value| value.as_str());

        // A content-less reply is not an error: the placeholder fails every
        // extraction pattern and degrades to the sentinel downstream.
        Ok(content.unwrap_or("No response generated").to_string())
    }
}
