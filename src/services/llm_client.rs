use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const MAX_RETRIES: usize = 3;

/// Thin chat-completions client for any OpenAI-compatible endpoint.
#[derive(Clone, Debug)]
pub struct LlmClient {
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub async fn chat_completion(&self, body: &Value, timeout: Duration) -> Result<Value> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Agent(format!("Failed to build HTTP client: {err}")))?;

        let mut attempt = 0;
        let mut backoff = Duration::from_millis(250);

        loop {
            let request_url = build_chat_url(&self.base_url);

            let response = client
                .post(&request_url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .header("X-Title", "trip-planner-rs")
                .json(body)
                .send()
                .await
                .map_err(|err| PlannerError::Agent(format!("HTTP request failed: {err}")))?;

            let status = response.status();
            let headers = response.headers().clone();
            let response_text = response
                .text()
                .await
                .map_err(|err| PlannerError::Agent(format!("Failed to read response: {err}")))?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after_duration = headers
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(backoff);

                if attempt < MAX_RETRIES {
                    tokio::time::sleep(retry_after_duration).await;
                    attempt += 1;
                    backoff *= 2;
                    continue;
                }

                return Err(PlannerError::RateLimit {
                    retry_after: retry_after_duration.as_secs().max(1),
                });
            }

            if status.is_server_error() && attempt < MAX_RETRIES {
                tokio::time::sleep(backoff).await;
                attempt += 1;
                backoff *= 2;
                continue;
            }

            let response_json: Value = serde_json::from_str(&response_text)?;

            if !status.is_success() {
                let api_message = response_json
                    .get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(|value| value.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or(response_text.clone());

                return Err(PlannerError::Agent(format!(
                    "HTTP {} error: {}",
                    status, api_message
                )));
            }

            if let Some(error) = response_json.get("error") {
                let error_message = error
                    .get("message")
                    .and_then(|value| value.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| error.to_string());
                return Err(PlannerError::Agent(format!("API error: {}", error_message)));
            }

            return Ok(response_json);
        }
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Request body builder for one consultation call.
#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_url_appends_path() {
        assert_eq!(
            build_chat_url("https://openrouter.ai/api/v1"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("https://openrouter.ai/api/v1/"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("http://localhost:11434/v1/chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest::new(
            "mistral",
            vec![json!({"role": "user", "content": "hi"})],
        )
        .with_max_tokens(Some(1000))
        .with_temperature(Some(0.3))
        .into_value();

        assert_eq!(body["model"], "mistral");
        assert_eq!(body["max_tokens"], 1000);
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }
}
