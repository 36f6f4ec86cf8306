use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenAI,
    Anthropic,
    Google,
    Grok,
}

impl AiProvider {
    /// Returns the unique identifier used in stored settings (e.g., "openai", "anthropic")
    pub fn provider_name(&self) -> &'static str {
        match self {
            AiProvider::OpenAI => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Google => "google",
            AiProvider::Grok => "grok",
        }
    }

    /// Human-readable vendor name shown in health reports and UI strings
    pub fn display_name(&self) -> &'static str {
        match self {
            AiProvider::OpenAI => "OpenAI",
            AiProvider::Anthropic => "Anthropic",
            AiProvider::Google => "Google",
            AiProvider::Grok => "xAI Grok",
        }
    }

    /// Helper to parse from a string (handles aliases)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(AiProvider::OpenAI),
            "anthropic" | "claude" => Some(AiProvider::Anthropic),
            "google" | "gemini" => Some(AiProvider::Google),
            "grok" | "xai" => Some(AiProvider::Grok),
            _ => None,
        }
    }

    /// Settings-store semantics: any unrecognized value resolves to OpenAI.
    pub fn from_name_or_default(s: &str) -> Self {
        Self::from_name(s).unwrap_or_default()
    }
}

// Ensure Display trait matches provider_name for convenience
impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_name())
    }
}
