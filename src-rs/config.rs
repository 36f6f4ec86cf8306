use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cons::provider_cons::AiProvider;

pub const MAX_CONTEXT_CHARS: usize = 500;
pub const MAX_TONE_CHARS: usize = 100;
pub const MAX_FILTER_ENTRIES: usize = 5;

/// How suggestions should lean: timely/seasonal, always-relevant, or a blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusType {
    #[default]
    Mix,
    Trends,
    Evergreen,
}

impl FocusType {
    pub fn from_name_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "trends" => FocusType::Trends,
            "evergreen" => FocusType::Evergreen,
            _ => FocusType::Mix,
        }
    }
}

/// Settings snapshot read once per request and threaded through the call
/// path. The API key is stored in plaintext, matching the host option store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default)]
    pub provider: AiProvider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub site_context: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub avoid_topics: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cultures: Vec<String>,
    #[serde(default)]
    pub beliefs: Vec<String>,
    #[serde(default)]
    pub focus_type: FocusType,
}

/// Raw settings as submitted by a settings form; everything is a string and
/// nothing is trusted yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub site_context: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub avoid_topics: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cultures: Vec<String>,
    #[serde(default)]
    pub beliefs: Vec<String>,
    #[serde(default)]
    pub focus_type: String,
}

/// Drops control characters, then trims. Single-line fields also lose
/// embedded newlines; multi-line fields keep them.
fn strip_control(value: &str, keep_newlines: bool) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() || (keep_newlines && (*c == '\n' || *c == '\r')))
        .collect::<String>()
        .trim()
        .to_string()
}

fn cap_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        return value;
    }
    value.chars().take(max).collect()
}

/// Multi-line free text, capped at 500 characters to keep tokens down.
pub fn sanitize_context_field(value: &str) -> String {
    cap_chars(strip_control(value, true), MAX_CONTEXT_CHARS)
}

/// Single-line free text, capped at 100 characters.
pub fn sanitize_short_field(value: &str) -> String {
    cap_chars(strip_control(value, false), MAX_TONE_CHARS)
}

/// An empty submission keeps the stored key (the form shows a placeholder
/// instead of the real value). Otherwise only whitespace is trimmed;
/// aggressive sanitization can corrupt API keys.
pub fn sanitize_api_key(submitted: &str, existing: &str) -> String {
    if submitted.trim().is_empty() {
        existing.to_string()
    } else {
        submitted.trim().to_string()
    }
}

fn sanitize_filter_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| sanitize_short_field(v))
        .filter(|v| !v.is_empty())
        .take(MAX_FILTER_ENTRIES)
        .collect()
}

impl CalendarSettings {
    /// Applies a raw form submission on top of the current settings,
    /// sanitizing every field the way the host option store would.
    pub fn apply_update(&self, update: &SettingsUpdate) -> CalendarSettings {
        CalendarSettings {
            provider: AiProvider::from_name_or_default(&update.provider),
            api_key: sanitize_api_key(&update.api_key, &self.api_key),
            site_context: sanitize_context_field(&update.site_context),
            tone: sanitize_short_field(&update.tone),
            avoid_topics: sanitize_context_field(&update.avoid_topics),
            countries: sanitize_filter_list(&update.countries),
            cultures: sanitize_filter_list(&update.cultures),
            beliefs: sanitize_filter_list(&update.beliefs),
            focus_type: FocusType::from_name_or_default(&update.focus_type),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Default on-disk location: ~/.edcal/edcal.json
    pub fn settings_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".edcal").join("edcal.json"))
    }

    pub fn load() -> Result<Self> {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings at {}", path.display()))?;
        let settings: CalendarSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings at {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()
            .context("Could not resolve home directory for settings")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Removes every stored setting (the uninstall action).
    pub fn delete_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to delete settings at {}", path.display()))?;
        }
        Ok(())
    }
}
