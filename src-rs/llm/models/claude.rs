use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::llm::models::provider_base::{
    clamp_max_tokens, http_client, require_success_field, require_text, validate_invocation,
    ProviderClient,
};

pub const ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct ClaudeClient {
    pub api_key: String,
    pub model: String,
}

impl ClaudeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: ANTHROPIC_MODEL.to_string(),
        }
    }
}

pub(crate) fn build_messages_request_body(model: &str, prompt: &str, max_tokens: u32) -> Value {
    json!({
        "model": model,
        "max_tokens": max_tokens,
        "messages": [
            { "role": "user", "content": prompt }
        ],
    })
}

/// Success shape is `content: [{type: "text", text: ...}]`.
pub(crate) fn text_from_messages_body(body: &Value) -> Result<String> {
    let content = require_success_field("Anthropic", body, "content")?;
    let text = content[0]
        .get("text")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    require_text("Anthropic", text)
}

impl ProviderClient for ClaudeClient {
    async fn invoke(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        validate_invocation(&self.api_key, prompt)?;
        let request_body =
            build_messages_request_body(&self.model, prompt, clamp_max_tokens(max_tokens));

        let response = http_client()?
            .post(ANTHROPIC_ENDPOINT)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Anthropic API")?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(super::provider_base::response_error("Anthropic", response).await);
        }

        let body: Value = response
            .json()
            .await
            .context("Invalid API response format from Anthropic")?;

        text_from_messages_body(&body)
    }
}
