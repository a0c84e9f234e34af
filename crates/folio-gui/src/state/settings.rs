//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use folio_content::ContentSource;

use crate::theme::ThemeConfig;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,

    /// Content source settings.
    pub content: ContentSettings,

    /// Contact form settings.
    pub contact: ContactSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "FolioStudio", "Folio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme configuration (light/dark/system).
    pub theme: ThemeConfig,

    /// Skip entrance and typewriter animations.
    pub reduce_motion: bool,
}

// =============================================================================
// CONTENT SETTINGS
// =============================================================================

/// Where portfolio content (projects, skills, timeline) is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Base URL or local directory holding the content JSON files.
    pub source: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            source: "content".to_string(),
        }
    }
}

impl ContentSettings {
    /// Resolve the configured source string.
    pub fn source(&self) -> ContentSource {
        ContentSource::parse(&self.source)
    }
}

// =============================================================================
// CONTACT SETTINGS
// =============================================================================

/// Contact form delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Form endpoint URL. When unset, submission is simulated locally.
    pub endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn defaults_follow_the_system_theme() {
        let settings = Settings::default();
        assert_eq!(settings.display.theme.mode, ThemeMode::System);
        assert!(!settings.display.reduce_motion);
        assert!(settings.contact.endpoint.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let parsed: Settings = toml::from_str("[display]\nreduce_motion = true\n")
            .expect("partial settings should parse");
        assert!(parsed.display.reduce_motion);
        assert_eq!(parsed.content.source, "content");
    }

    #[test]
    fn round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.display.theme.mode = ThemeMode::Dark;
        settings.contact.endpoint = Some("https://example.com/form".to_string());

        let encoded = toml::to_string_pretty(&settings).expect("serialize");
        let decoded: Settings = toml::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded.display.theme.mode, ThemeMode::Dark);
        assert_eq!(
            decoded.contact.endpoint.as_deref(),
            Some("https://example.com/form")
        );
    }
}
