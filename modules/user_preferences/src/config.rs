//! Configuration for user preferences module

use serde::Deserialize;
use std::time::Duration;

/// What an edit of an undocumented field key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Fail the edit with `PreferencesError::UnknownField`
    #[default]
    Reject,
    /// Log and drop the edit; nothing is emitted
    Ignore,
}

/// User preferences configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Preview clock resample period in milliseconds
    #[serde(default = "default_preview_interval_ms")]
    pub preview_interval_ms: u64,

    /// Handling of edits to undocumented field keys
    #[serde(default)]
    pub unknown_field_policy: UnknownFieldPolicy,

    /// Language whose locale renders the preview when the user's language is unknown
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_interval_ms: default_preview_interval_ms(),
            unknown_field_policy: UnknownFieldPolicy::default(),
            fallback_language: default_fallback_language(),
        }
    }
}

impl Config {
    /// Parse a YAML document
    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        if config.preview_interval_ms == 0 {
            anyhow::bail!("preview_interval_ms must be greater than zero");
        }
        Ok(config)
    }

    /// Preview tick period, never zero
    pub fn preview_interval(&self) -> Duration {
        Duration::from_millis(self.preview_interval_ms.max(1))
    }
}

fn default_preview_interval_ms() -> u64 {
    1000
}

fn default_fallback_language() -> String {
    "en".to_string()
}
