//! Text-completion seam used by the letter service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::LetterGenerationConfig;

/// Required API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(String),
    #[error("completion response could not be parsed: {0}")]
    Decode(String),
    #[error("completion service returned no text")]
    EmptyResponse,
    #[error("completion task failed: {0}")]
    Task(String),
}

/// External text-completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Completion, CompletionError>;
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic Messages API client. Calls are blocking, so each one runs on the blocking pool.
#[derive(Clone)]
pub struct AnthropicCompletionClient {
    api_key: String,
    model: String,
    api_url: String,
}

impl AnthropicCompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            api_url: api_url.into(),
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &LetterGenerationConfig) -> Option<Self> {
        config
            .api_key
            .as_deref()
            .map(|key| Self::new(key, config.model.clone(), config.api_url.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn call(&self, prompt: &str, max_tokens: u32) -> Result<Completion, CompletionError> {
        let request_body = MessagesRequest {
            model: self.model.clone(),
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let agent = ureq::Agent::new_with_defaults();
        let response = agent
            .post(self.api_url.as_str())
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .send_json(&request_body)
            .map_err(|err| CompletionError::Request(err.to_string()))?;

        let body: MessagesResponse = response
            .into_body()
            .read_json()
            .map_err(|err| CompletionError::Decode(err.to_string()))?;

        first_text(body)
    }
}

impl std::fmt::Debug for AnthropicCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicCompletionClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn first_text(body: MessagesResponse) -> Result<Completion, CompletionError> {
    body.content
        .into_iter()
        .find(|block| block.block_type == "text")
        .and_then(|block| block.text)
        .filter(|text| !text.trim().is_empty())
        .map(|text| Completion { text })
        .ok_or(CompletionError::EmptyResponse)
}

#[async_trait]
impl CompletionClient for AnthropicCompletionClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Completion, CompletionError> {
        let client = self.clone();
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || client.call(&prompt, max_tokens))
            .await
            .map_err(|err| CompletionError::Task(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> MessagesResponse {
        serde_json::from_value(json).expect("response shape")
    }

    #[test]
    fn picks_first_text_block() {
        let body = response(serde_json::json!({
            "content": [
                { "type": "tool_use", "id": "x" },
                { "type": "text", "text": "Dear Sir or Madam," }
            ]
        }));

        assert_eq!(first_text(body).expect("text").text, "Dear Sir or Madam,");
    }

    #[test]
    fn blank_or_missing_text_is_an_error() {
        let blank = response(serde_json::json!({
            "content": [{ "type": "text", "text": "   " }]
        }));
        assert!(matches!(first_text(blank), Err(CompletionError::EmptyResponse)));

        let empty = response(serde_json::json!({ "content": [] }));
        assert!(matches!(first_text(empty), Err(CompletionError::EmptyResponse)));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = AnthropicCompletionClient::new("sk-secret", "model-x", "http://localhost");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("model-x"));
    }
}
