//! Settings types with defaults

use serde::{Deserialize, Serialize};

/// Top-level settings, all sections optional in the file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub ui: UiSettings,
}

/// Generative-content service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Model identifier passed to the generateContent endpoint
    pub model: String,

    /// API base URL (override for proxies/test servers)
    pub base_url: String,

    /// How many KPIs the prompt asks for
    pub kpi_count: u8,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            kpi_count: 6,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use Unicode symbols for the spinner and bullets (ASCII fallback off)
    pub unicode_symbols: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            unicode_symbols: true,
        }
    }
}
