//! Toast notification component.
//!
//! Shows a temporary notification that auto-dismisses after a timeout.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::{Message, ToastMessage};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_THIN, PortfolioColors, SPACING_SM, SPACING_XS, button_ghost,
};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastState {
    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
///
/// The caller positions it; it renders as a compact elevated pill.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let toast_type = state.toast_type;

    let icon: Element<'_, Message> = match toast_type {
        ToastType::Success => lucide::circle_check()
            .size(18)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().success.base.color),
            })
            .into(),
        ToastType::Error => lucide::circle_x()
            .size(18)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into(),
    };

    let body = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&state.message).size(14),
        Space::new().width(SPACING_SM),
        button(lucide::x().size(14))
            .on_press(Message::Toast(ToastMessage::Dismiss))
            .padding([2.0, 4.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(body)
        .padding([SPACING_SM, SPACING_SM + SPACING_XS])
        .style(|theme: &Theme| {
            let folio = theme.folio();
            container::Style {
                background: Some(folio.background_elevated.into()),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    width: BORDER_WIDTH_THIN,
                    color: folio.border_default,
                },
                shadow: Shadow {
                    color: folio.shadow_strong,
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                },
                ..Default::default()
            }
        })
        .into()
}
