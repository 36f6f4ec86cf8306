use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;

/// Hard ceiling on tokens per request to bound cost and abuse.
pub const MAX_TOKENS_CEILING: u32 = 2000;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[allow(async_fn_in_trait)]
pub trait ProviderClient: Send + Sync {
    /// Issues exactly one completion request and returns the extracted
    /// plain text. No streaming, no partial results.
    async fn invoke(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Effective token budget is `min(max(1, requested), 2000)` regardless of
/// caller input.
pub fn clamp_max_tokens(requested: u32) -> u32 {
    requested.clamp(1, MAX_TOKENS_CEILING)
}

/// Fails fast before any network call leaves the process.
pub(crate) fn validate_invocation(api_key: &str, prompt: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        anyhow::bail!("API key is required");
    }
    if prompt.trim().is_empty() {
        anyhow::bail!("Prompt cannot be empty");
    }
    Ok(())
}

pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .context("Failed to build HTTP client")
}

/// Every vendor reports errors as `{"error": {"message": ...}}`.
pub(crate) fn vendor_error_message(body: &Value) -> Option<String> {
    body.pointer("/error/message")
        .and_then(|m| m.as_str())
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Builds the error for a non-200 response. The formatted status is kept in
/// the message so the retry layer can classify 429/5xx responses.
pub(crate) async fn response_error(vendor: &str, response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let detail = match response.json::<Value>().await {
        Ok(body) => vendor_error_message(&body),
        Err(_) => None,
    };
    let detail =
        detail.unwrap_or_else(|| format!("API request failed with status code: {}", status.as_u16()));
    log::warn!("{} API error ({}): {}", vendor, status, detail);
    anyhow::anyhow!("{} API error ({}): {}", vendor, status, detail)
}

/// Validates the decoded 200 body: an embedded error wins, then the vendor's
/// success field must be a non-empty array.
pub(crate) fn require_success_field<'a>(
    vendor: &str,
    body: &'a Value,
    field: &str,
) -> Result<&'a Vec<Value>> {
    if body.get("error").is_some() {
        let message = vendor_error_message(body).unwrap_or_else(|| "API error".to_string());
        anyhow::bail!("{} API error: {}", vendor, message);
    }
    match body.get(field).and_then(|v| v.as_array()) {
        Some(items) if !items.is_empty() => Ok(items),
        _ => anyhow::bail!("Invalid response structure from {} API", vendor),
    }
}

pub(crate) fn require_text(vendor: &str, text: &str) -> Result<String> {
    if text.trim().is_empty() {
        anyhow::bail!("Empty response from {} API", vendor);
    }
    Ok(text.to_string())
}
