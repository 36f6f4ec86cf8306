use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::llm::models::provider_base::{
    http_client, require_success_field, require_text, validate_invocation, ProviderClient,
};

pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    pub api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

pub(crate) fn build_generate_content_request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [{ "text": prompt }] }
        ],
    })
}

/// Success shape is `candidates[0].content.parts[0].text`.
pub(crate) fn text_from_generate_content_body(body: &Value) -> Result<String> {
    require_success_field("Google", body, "candidates")?;
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    require_text("Google", text)
}

impl ProviderClient for GeminiClient {
    // The generateContent body carries no token budget field; the shared
    // [1, 2000] ceiling is a no-op for this vendor.
    async fn invoke(&self, prompt: &str, _max_tokens: u32) -> Result<String> {
        validate_invocation(&self.api_key, prompt)?;
        let request_body = build_generate_content_request_body(prompt);

        let response = http_client()?
            .post(GEMINI_ENDPOINT)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Google API")?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(super::provider_base::response_error("Google", response).await);
        }

        let body: Value = response
            .json()
            .await
            .context("Invalid API response format from Google")?;

        text_from_generate_content_body(&body)
    }
}
