//! Project detail dialog overlay.
//!
//! The dialog stacks on top of the page: base content, then an opaque
//! backdrop that blocks (and absorbs) interaction, then the centered dialog.
//! Clicking the backdrop closes the dialog, as does Escape via the global
//! keyboard handler.

use std::time::Instant;

use iced::widget::{
    Space, button, center, column, container, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Border, Color, Element, Length, Theme};
use iced_fonts::lucide;

use folio_model::{Project, format_category};

use crate::constants::MODAL_CLOSE_ANIMATION;
use crate::message::{GalleryMessage, Message};
use crate::state::ModalState;
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_WIDTH_MEDIUM, MODAL_WIDTH, PortfolioColors, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, button_ghost, button_primary, button_secondary, container_modal,
};

/// Focusable dialog elements in tab order: close button first, then links.
const FOCUS_CLOSE: usize = 0;

/// Stack the project detail dialog over the base content.
pub fn project_modal<'a>(
    base: Element<'a, Message>,
    project: &'a Project,
    modal: &ModalState,
    now: Instant,
) -> Element<'a, Message> {
    let backdrop_alpha = match modal {
        // Mounted but not yet active: the entrance frame.
        ModalState::Opening { .. } => 0.0,
        ModalState::Open { .. } => 1.0,
        ModalState::Closing { started, .. } => {
            let elapsed = now.duration_since(*started).as_secs_f32();
            (1.0 - elapsed / MODAL_CLOSE_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
        }
        ModalState::Closed => return base,
    };

    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let folio = theme.folio();
            container::Style {
                background: Some(
                    Color {
                        a: folio.backdrop.a * backdrop_alpha,
                        ..folio.backdrop
                    }
                    .into(),
                ),
                ..Default::default()
            }
        });

    let focus = modal.focus();
    let dialog = container(dialog_content(project, focus))
        .width(Length::Fixed(MODAL_WIDTH))
        .padding(SPACING_LG)
        .style(container_modal);

    stack![
        base,
        opaque(
            mouse_area(backdrop).on_press(Message::Gallery(GalleryMessage::CloseRequested))
        ),
        center(dialog),
    ]
    .into()
}

fn dialog_content<'a>(project: &'a Project, focus: Option<usize>) -> Element<'a, Message> {
    let close = button(lucide::x().size(20).style(|theme: &Theme| {
        iced::widget::text::Style {
            color: Some(theme.folio().text_muted),
        }
    }))
    .on_press(Message::Gallery(GalleryMessage::CloseRequested))
    .padding([4.0, 8.0])
    .style(focusable(button_ghost, focus == Some(FOCUS_CLOSE)));

    let header = row![
        text(&project.title).size(20),
        Space::new().width(Length::Fill),
        close,
    ]
    .align_y(Alignment::Center);

    let categories = row(project
        .categories
        .iter()
        .map(|c| category_badge(format_category(c))))
    .spacing(SPACING_XS);

    let description = text(&project.description).size(14);

    let mut body = column![header, categories, description].spacing(SPACING_MD);

    if !project.features.is_empty() {
        let mut features = column![text("Highlights").size(14)].spacing(SPACING_XS);
        for feature in &project.features {
            features = features.push(
                row![
                    lucide::check().size(12).style(|theme: &Theme| {
                        iced::widget::text::Style {
                            color: Some(theme.extended_palette().success.base.color),
                        }
                    }),
                    Space::new().width(SPACING_XS),
                    text(feature).size(13),
                ]
                .align_y(Alignment::Center),
            );
        }
        body = body.push(features);
    }

    if !project.tags.is_empty() {
        body = body.push(
            text(project.tags.join("  ·  "))
                .size(12)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.folio().text_muted),
                }),
        );
    }

    // Links follow the close button in focus order.
    if !project.links.is_empty() {
        let mut focus_index = FOCUS_CLOSE + 1;
        let mut links = row![].spacing(SPACING_SM);

        if let Some(demo) = &project.links.demo {
            links = links.push(
                button(text("Live Demo").size(13))
                    .on_press(Message::OpenUrl(demo.clone()))
                    .padding([8.0, 16.0])
                    .style(focusable(button_primary, focus == Some(focus_index))),
            );
            focus_index += 1;
        }
        if let Some(code) = &project.links.code {
            links = links.push(
                button(text("View Code").size(13))
                    .on_press(Message::OpenUrl(code.clone()))
                    .padding([8.0, 16.0])
                    .style(focusable(button_secondary, focus == Some(focus_index))),
            );
        }
        body = body.push(links);
    }

    body.into()
}

/// Wrap a button style, adding a focus ring when the element holds the
/// dialog's trapped keyboard focus.
fn focusable(
    inner: impl Fn(&Theme, button::Status) -> button::Style,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let mut style = inner(theme, status);
        if focused {
            style.border = Border {
                color: theme.folio().border_focused,
                width: BORDER_WIDTH_MEDIUM,
                ..style.border
            };
        }
        style
    }
}

fn category_badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(11).style(|theme: &Theme| {
        iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }
    }))
    .padding([2.0, SPACING_SM])
    .style(|theme: &Theme| {
        let folio = theme.folio();
        container::Style {
            background: Some(folio.accent_light.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    })
    .into()
}
