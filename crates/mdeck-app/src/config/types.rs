//! Configuration types for MaintDeck

use serde::{Deserialize, Serialize};

/// Application settings (`.mdeck/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Diagnostic backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base address of the diagnostic backend
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Request timeout in seconds. A hung request converts to the error
    /// state when this elapses.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Display-only clamp on source excerpts, in lines
    #[serde(default = "default_excerpt_lines")]
    pub excerpt_lines: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            excerpt_lines: default_excerpt_lines(),
        }
    }
}

fn default_excerpt_lines() -> usize {
    3
}
