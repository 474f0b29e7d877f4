//! Configuration
//!
//! Defaults match the shipped app; any field can be overridden from JSON.

use serde::Deserialize;

/// Settings for `TodoListStore`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Durable storage key holding the serialized list
    pub storage_key: String,
    /// Validation message shown when submitting an empty draft
    pub empty_draft_message: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            empty_draft_message: "Kindly add something".to_string(),
        }
    }
}

/// Settings for the presentation shell
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Viewports narrower than this (in CSS px) switch to icon labels
    pub narrow_breakpoint_px: f64,
    pub brand: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
            brand: "TaskChanger".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Parse overrides; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
