//! Color extension trait for app-specific colors.
//!
//! Provides an extension trait `PortfolioColors` that adds colors not covered
//! by Iced's built-in `ExtendedPalette`. Use it inside style closures that
//! receive a `&Theme`.

use iced::{Color, Theme};

// =============================================================================
// PORTFOLIO COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioColorSet {
    // === Borders ===
    /// Default border color
    pub border_default: Color,
    /// Subtle/lighter border
    pub border_subtle: Color,
    /// Focused element border (accent color)
    pub border_focused: Color,
    /// Error border color
    pub border_error: Color,

    // === Backgrounds ===
    /// Secondary background (alternating sections)
    pub background_secondary: Color,
    /// Elevated surface (cards, dialogs)
    pub background_elevated: Color,
    /// Inset/recessed areas (level bar tracks, code chips)
    pub background_inset: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (descriptions, hints)
    pub text_muted: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,

    // === Interactive ===
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Accent disabled color
    pub accent_disabled: Color,
    /// Light tint of the accent (hover backgrounds, badges)
    pub accent_light: Color,
    /// Medium tint of the accent (selections)
    pub accent_medium: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for higher elevation
    pub shadow_strong: Color,
    /// Dialog backdrop overlay
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for portfolio-specific colors.
pub trait PortfolioColors {
    /// Get the portfolio color set for this theme.
    fn folio(&self) -> PortfolioColorSet;
}

impl PortfolioColors for Theme {
    fn folio(&self) -> PortfolioColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let base = palette.background.base.color;
        let text = palette.background.base.text;
        let primary = palette.primary.base.color;

        PortfolioColorSet {
            border_default: if is_dark {
                Color::from_rgb(0.26, 0.26, 0.30)
            } else {
                Color::from_rgb(0.85, 0.85, 0.88)
            },
            border_subtle: if is_dark {
                Color::from_rgb(0.19, 0.19, 0.23)
            } else {
                Color::from_rgb(0.91, 0.91, 0.94)
            },
            border_focused: primary,
            border_error: palette.danger.base.color,

            background_secondary: if is_dark {
                blend_color(base, Color::WHITE, 0.04)
            } else {
                blend_color(base, Color::BLACK, 0.03)
            },
            background_elevated: if is_dark {
                blend_color(base, Color::WHITE, 0.07)
            } else {
                Color::WHITE
            },
            background_inset: if is_dark {
                blend_color(base, Color::BLACK, 0.25)
            } else {
                Color::from_rgb(0.93, 0.93, 0.95)
            },

            text_secondary: blend_color(text, base, 0.18),
            text_muted: blend_color(text, base, 0.40),
            text_disabled: blend_color(text, base, 0.60),
            text_on_accent: Color::WHITE,

            accent_hover: if is_dark {
                blend_color(primary, Color::WHITE, 0.15)
            } else {
                blend_color(primary, Color::BLACK, 0.12)
            },
            accent_pressed: if is_dark {
                blend_color(primary, Color::BLACK, 0.15)
            } else {
                blend_color(primary, Color::BLACK, 0.24)
            },
            accent_disabled: blend_color(primary, base, 0.65),
            accent_light: Color {
                a: if is_dark { 0.18 } else { 0.10 },
                ..primary
            },
            accent_medium: Color {
                a: if is_dark { 0.32 } else { 0.22 },
                ..primary
            },

            shadow: Color {
                a: if is_dark { 0.45 } else { 0.10 },
                ..Color::BLACK
            },
            shadow_strong: Color {
                a: if is_dark { 0.60 } else { 0.22 },
                ..Color::BLACK
            },
            backdrop: Color {
                a: 0.55,
                ..Color::BLACK
            },
        }
    }
}

/// Blend two colors, `amount` of `other` into `color`.
pub fn blend_color(color: Color, other: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color {
        r: color.r + (other.r - color.r) * t,
        g: color.g + (other.g - color.g) * t,
        b: color.b + (other.b - color.b) * t,
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color::from_rgb(0.0, 0.5, 1.0);
        let b = Color::from_rgb(1.0, 0.5, 0.0);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0).r, 1.0);
    }

    #[test]
    fn blend_clamps_amount() {
        let a = Color::from_rgb(0.2, 0.2, 0.2);
        let blended = blend_color(a, Color::WHITE, 2.0);
        assert!(blended.r <= 1.0);
    }
}
