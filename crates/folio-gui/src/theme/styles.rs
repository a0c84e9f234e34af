//! Widget style functions for the portfolio theme.
//!
//! Style functions receive `&Theme` and use it to access colors, so they can
//! be passed directly to `.style(...)` on widgets.

use iced::widget::{button, container, progress_bar, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::PortfolioColors;
use super::palette::{ThemeMode, portfolio_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the portfolio theme for the given mode.
pub fn portfolio_theme(mode: ThemeMode, system_is_dark: bool) -> Theme {
    let palette = portfolio_palette(mode, system_is_dark);
    let name = if mode.is_dark(system_is_dark) {
        "Folio Dark"
    } else {
        "Folio Light"
    };

    Theme::custom(name.to_string(), palette)
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: folio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: folio.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(folio.accent_hover.into()),
            text_color: folio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: folio.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(folio.accent_pressed.into()),
            text_color: folio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(folio.accent_disabled.into()),
            text_color: folio.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions, inactive filter chips.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    match status {
        button::Status::Active => button::Style {
            background: Some(folio.background_elevated.into()),
            text_color: folio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.border_default,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.base.color.into()),
            text_color: folio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.text_disabled,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(folio.background_secondary.into()),
            text_color: folio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.border_default,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(folio.background_secondary.into()),
            text_color: folio.text_disabled,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.border_subtle,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Ghost button style - minimal visual weight (close buttons, inline links).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(folio.accent_light.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(folio.accent_medium.into()),
            text_color: folio.accent_pressed,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: folio.text_disabled,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let folio = theme.folio();

    container::Style {
        background: Some(folio.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: folio.border_subtle,
        },
        shadow: Shadow {
            color: folio.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Modal container style - dialog overlay.
pub fn container_modal(theme: &Theme) -> container::Style {
    let folio = theme.folio();

    container::Style {
        background: Some(folio.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: folio.border_subtle,
        },
        shadow: Shadow {
            color: folio.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        text_color: None,
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    match status {
        text_input::Status::Active => text_input::Style {
            background: folio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.border_default,
            },
            icon: folio.text_muted,
            placeholder: folio.text_disabled,
            value: palette.background.base.text,
            selection: folio.accent_medium,
        },
        text_input::Status::Hovered => text_input::Style {
            background: folio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.text_disabled,
            },
            icon: folio.text_muted,
            placeholder: folio.text_disabled,
            value: palette.background.base.text,
            selection: folio.accent_medium,
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: folio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_MEDIUM,
                color: folio.border_focused,
            },
            icon: folio.text_muted,
            placeholder: folio.text_disabled,
            value: palette.background.base.text,
            selection: folio.accent_medium,
        },
        text_input::Status::Disabled => text_input::Style {
            background: folio.background_secondary.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: folio.border_default,
            },
            icon: folio.text_disabled,
            placeholder: folio.text_disabled,
            value: folio.text_muted,
            selection: folio.border_subtle,
        },
    }
}

/// Text input style with an error border, used after failed validation.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let folio = theme.folio();
    let mut style = text_input_default(theme, status);
    style.border.color = folio.border_error;
    style
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style - skill level bars.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    progress_bar::Style {
        background: folio.background_inset.into(),
        bar: palette.primary.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}
