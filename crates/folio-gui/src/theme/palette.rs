//! Color palettes for Folio Studio.
//!
//! Provides the light and dark palettes that integrate with Iced's theme
//! system via the `Palette` type.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
///
/// `System` follows the OS preference. An explicit choice is stored only
/// when it differs from what the OS would pick anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Check if this mode is dark (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced `Palette` for the given mode.
///
/// Iced expands this into its `ExtendedPalette`, which provides the color
/// variations used by the built-in widget styles.
pub fn portfolio_palette(mode: ThemeMode, system_is_dark: bool) -> Palette {
    if mode.is_dark(system_is_dark) {
        dark_palette()
    } else {
        light_palette()
    }
}

/// Light palette - warm near-white background with an indigo accent.
fn light_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.12, 0.12, 0.15),
        primary: Color::from_rgb(0.31, 0.27, 0.90), // Indigo
        success: Color::from_rgb(0.13, 0.65, 0.37), // Green
        warning: Color::from_rgb(0.95, 0.65, 0.05), // Amber
        danger: Color::from_rgb(0.86, 0.22, 0.27),  // Red
    }
}

/// Dark palette - near-black background with a brighter indigo accent.
fn dark_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.07, 0.07, 0.10),
        text: Color::from_rgb(0.93, 0.93, 0.96),
        primary: Color::from_rgb(0.51, 0.47, 0.96),
        success: Color::from_rgb(0.29, 0.78, 0.49),
        warning: Color::from_rgb(1.0, 0.76, 0.25),
        danger: Color::from_rgb(0.95, 0.40, 0.42),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_os_preference() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
    }

    #[test]
    fn explicit_modes_ignore_os_preference() {
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }
}
