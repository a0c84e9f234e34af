//! Theme module for Folio Studio.
//!
//! Provides the portfolio theme with:
//! - Light/dark color palettes (`palette`)
//! - An extension trait for app-specific colors (`colors`)
//! - Custom widget styles (`styles`)
//! - Spacing constants (`spacing`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, PortfolioColors};
//!
//! // Use a pre-defined style function
//! button(text("Send")).style(button_primary)
//!
//! // Or create custom styles inside closures
//! container(content).style(|theme: &Theme| {
//!     let folio = theme.folio();
//!     container::Style {
//!         background: Some(folio.background_elevated.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{PortfolioColorSet, PortfolioColors};
pub use palette::ThemeMode;
pub use styles::{
    button_ghost, button_primary, button_secondary, container_card, container_modal,
    portfolio_theme, progress_bar_primary, text_input_default,
};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    SPACING_XXL,
};

use serde::{Deserialize, Serialize};

/// Theme configuration for the application.
///
/// Changes apply immediately without restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Appearance mode (light/dark/system).
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
        }
    }
}

impl ThemeConfig {
    /// Check if the configuration resolves to dark mode.
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        self.mode.is_dark(system_is_dark)
    }
}
