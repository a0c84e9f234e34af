//! Theme handlers.
//!
//! The toggle flips the effective appearance. When the result matches what
//! the OS would pick anyway, the stored preference becomes `System` so the
//! app keeps following OS changes; only a choice that disagrees with the OS
//! is pinned explicitly.

use iced::Task;

use crate::component::ToastState;
use crate::error::GuiError;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::ThemeMode;

/// The mode that results from pressing the theme toggle.
pub fn toggled_mode(current: ThemeMode, system_is_dark: bool) -> ThemeMode {
    let target_dark = !current.is_dark(system_is_dark);
    if target_dark == system_is_dark {
        ThemeMode::System
    } else if target_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

pub fn handle_toggle(state: &mut AppState) -> Task<Message> {
    let mode = toggled_mode(state.settings.display.theme.mode, state.system_is_dark);
    state.settings.display.theme.mode = mode;
    tracing::info!(%mode, "Theme changed");

    if let Err(reason) = state.settings.save() {
        tracing::warn!(%reason, "Could not persist settings");
        state.toast = Some(ToastState::error(
            GuiError::SettingsSave { reason }.to_string(),
        ));
    }
    Task::none()
}

pub fn handle_system_changed(state: &mut AppState, mode: iced::theme::Mode) -> Task<Message> {
    state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_away_from_os_pins_an_explicit_mode() {
        // OS is light; toggling from System goes explicitly dark.
        assert_eq!(toggled_mode(ThemeMode::System, false), ThemeMode::Dark);
        // OS is dark; toggling from System goes explicitly light.
        assert_eq!(toggled_mode(ThemeMode::System, true), ThemeMode::Light);
    }

    #[test]
    fn toggle_back_to_os_preference_stores_system() {
        // Explicit dark on a light OS; toggling lands on the OS default.
        assert_eq!(toggled_mode(ThemeMode::Dark, false), ThemeMode::System);
        // Explicit light on a dark OS; same.
        assert_eq!(toggled_mode(ThemeMode::Light, true), ThemeMode::System);
    }

    #[test]
    fn toggle_an_explicit_mode_that_matches_the_os() {
        // Explicit light on a light OS; the flip disagrees with the OS.
        assert_eq!(toggled_mode(ThemeMode::Light, false), ThemeMode::Dark);
        assert_eq!(toggled_mode(ThemeMode::Dark, true), ThemeMode::Light);
    }
}
