use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::letters::completion::{Completion, CompletionClient, CompletionError};
use crate::workflows::letters::domain::{GenerateLetterTypeRequest, LetterType};
use crate::workflows::letters::service::LetterService;

pub(super) const MAX_TOKENS: u32 = 2_048;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

/// Returns canned text and records every prompt it receives.
#[derive(Default)]
pub(super) struct ScriptedClient {
    reply: String,
    pub(super) prompts: Mutex<Vec<(String, u32)>>,
}

impl ScriptedClient {
    pub(super) fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Completion, CompletionError> {
        self.prompts
            .lock()
            .expect("prompt log")
            .push((prompt.to_string(), max_tokens));
        Ok(Completion {
            text: self.reply.clone(),
        })
    }
}

pub(super) struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<Completion, CompletionError> {
        Err(CompletionError::Request("connection refused".to_string()))
    }
}

pub(super) fn service_with(client: Arc<dyn CompletionClient>) -> LetterService {
    LetterService::new(Some(client), MAX_TOKENS)
}

pub(super) fn request(letter_type: LetterType) -> GenerateLetterTypeRequest {
    let mut request = GenerateLetterTypeRequest::new(
        letter_type,
        "The washing machine stopped working after three weeks.",
    );
    request.company = Some("HomeGoods Ltd".to_string());
    request
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
