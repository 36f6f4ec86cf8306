use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::llm::models::provider_base::{
    clamp_max_tokens, http_client, require_success_field, require_text, validate_invocation,
    ProviderClient,
};

pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const GROK_ENDPOINT: &str = "https://api.x.ai/v1/chat/completions";

pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const GROK_MODEL: &str = "grok-2";

/// Chat-completions client. xAI Grok speaks the same wire format, so the
/// Grok factory reuses this client with its own endpoint and model.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    pub vendor: &'static str,
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl OpenAiClient {
    pub fn new(vendor: &'static str, endpoint: String, api_key: String, model: String) -> Self {
        Self {
            vendor,
            endpoint,
            api_key,
            model,
        }
    }
}

pub fn create_openai(api_key: String) -> OpenAiClient {
    OpenAiClient::new(
        "OpenAI",
        OPENAI_ENDPOINT.to_string(),
        api_key,
        OPENAI_MODEL.to_string(),
    )
}

pub fn create_grok(api_key: String) -> OpenAiClient {
    OpenAiClient::new(
        "Grok",
        GROK_ENDPOINT.to_string(),
        api_key,
        GROK_MODEL.to_string(),
    )
}

pub(crate) fn build_chat_completions_request_body(
    model: &str,
    prompt: &str,
    max_tokens: u32,
) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ],
        "max_tokens": max_tokens,
    })
}

pub(crate) fn text_from_chat_completions_body(vendor: &str, body: &Value) -> Result<String> {
    let choices = require_success_field(vendor, body, "choices")?;
    let content = choices[0]
        .pointer("/message/content")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    require_text(vendor, content)
}

impl ProviderClient for OpenAiClient {
    async fn invoke(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        validate_invocation(&self.api_key, prompt)?;
        let request_body =
            build_chat_completions_request_body(&self.model, prompt, clamp_max_tokens(max_tokens));

        let response = http_client()?
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {} API", self.vendor))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(super::provider_base::response_error(self.vendor, response).await);
        }

        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Invalid API response format from {}", self.vendor))?;

        text_from_chat_completions_body(self.vendor, &body)
    }
}
