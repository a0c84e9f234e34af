//! Loading and error placeholders for sections whose content is async.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{PortfolioColors, SPACING_MD, SPACING_SM, button_secondary};

/// Centered loading placeholder.
pub fn loading_state<'a, M: Clone + 'a>(label: &'a str) -> Element<'a, M> {
    container(
        column![
            lucide::loader().size(24).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.folio().text_muted),
                }
            }),
            text(label).size(13).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.folio().text_muted),
                }
            }),
        ]
        .align_x(Alignment::Center)
        .spacing(SPACING_SM),
    )
    .width(Length::Fill)
    .padding(SPACING_MD * 2.0)
    .align_x(Alignment::Center)
    .into()
}

/// Inline error with an optional retry action.
pub fn error_state<'a, M: Clone + 'a>(
    message: String,
    suggestion: &'a str,
    on_retry: Option<M>,
) -> Element<'a, M> {
    let mut body = column![
        lucide::triangle_alert().size(24).style(|theme: &Theme| {
            iced::widget::text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }
        }),
        text(message).size(14),
        text(suggestion).size(12).style(|theme: &Theme| {
            iced::widget::text::Style {
                color: Some(theme.folio().text_muted),
            }
        }),
    ]
    .align_x(Alignment::Center)
    .spacing(SPACING_SM);

    if let Some(retry) = on_retry {
        body = body.push(Space::new().height(SPACING_SM)).push(
            button(text("Retry").size(13))
                .on_press(retry)
                .padding([8.0, 16.0])
                .style(button_secondary),
        );
    }

    container(body)
        .width(Length::Fill)
        .padding(SPACING_MD * 2.0)
        .align_x(Alignment::Center)
        .into()
}
