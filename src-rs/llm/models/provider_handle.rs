use anyhow::Result;

use crate::cons::provider_cons::AiProvider;

use super::claude::ClaudeClient;
use super::gemini::GeminiClient;
use super::openai::{create_grok, create_openai, OpenAiClient};
pub use super::provider_base::ProviderClient;

/// Closed dispatch over the configured vendor, selected once at
/// configuration-read time.
pub enum AnyProviderClient {
    OpenAI(OpenAiClient),
    Anthropic(ClaudeClient),
    Google(GeminiClient),
    Grok(OpenAiClient),
}

impl AnyProviderClient {
    pub fn provider(&self) -> AiProvider {
        match self {
            AnyProviderClient::OpenAI(_) => AiProvider::OpenAI,
            AnyProviderClient::Anthropic(_) => AiProvider::Anthropic,
            AnyProviderClient::Google(_) => AiProvider::Google,
            AnyProviderClient::Grok(_) => AiProvider::Grok,
        }
    }
}

impl ProviderClient for AnyProviderClient {
    async fn invoke(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        match self {
            AnyProviderClient::OpenAI(c) => c.invoke(prompt, max_tokens).await,
            AnyProviderClient::Anthropic(c) => c.invoke(prompt, max_tokens).await,
            AnyProviderClient::Google(c) => c.invoke(prompt, max_tokens).await,
            AnyProviderClient::Grok(c) => c.invoke(prompt, max_tokens).await,
        }
    }
}

pub fn create_client(provider: AiProvider, api_key: String) -> AnyProviderClient {
    match provider {
        AiProvider::OpenAI => AnyProviderClient::OpenAI(create_openai(api_key)),
        AiProvider::Anthropic => AnyProviderClient::Anthropic(ClaudeClient::new(api_key)),
        AiProvider::Google => AnyProviderClient::Google(GeminiClient::new(api_key)),
        AiProvider::Grok => AnyProviderClient::Grok(create_grok(api_key)),
    }
}
