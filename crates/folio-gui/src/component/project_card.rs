//! Project card for the gallery grid.

use iced::widget::{Space, button, center, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use folio_model::{Project, format_category};

use crate::theme::spacing::{CARD_ART_HEIGHT, CARD_WIDTH};
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, PortfolioColors,
    SPACING_SM, SPACING_XS, container_card,
};

/// A pressable project card.
///
/// `entrance` in `0.0..=1.0` drives the slide-up on first reveal; `focused`
/// highlights the card that should hold keyboard focus after its dialog
/// closed.
pub fn project_card<'a, M: Clone + 'a>(
    project: &'a Project,
    on_press: M,
    entrance: f32,
    focused: bool,
) -> Element<'a, M> {
    // Placeholder artwork block; content images are referenced by path in the
    // data but not bundled with the app.
    let art = container(center(lucide::image().size(40).style(|theme: &Theme| {
        iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }
    })))
    .width(Length::Fill)
    .height(CARD_ART_HEIGHT)
    .style(|theme: &Theme| {
        let folio = theme.folio();
        container::Style {
            background: Some(folio.accent_light.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 0.0,
                color: iced::Color::TRANSPARENT,
            },
            ..Default::default()
        }
    });

    let mut header = row![text(&project.title).size(16)].align_y(Alignment::Center);
    if project.featured {
        header = header
            .push(Space::new().width(Length::Fill))
            .push(
                lucide::star()
                    .size(14)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().warning.base.color),
                    }),
            );
    }

    let categories = row(project
        .categories
        .iter()
        .map(|c| badge(format_category(c))))
    .spacing(SPACING_XS);

    let description = text(&project.description)
        .size(13)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.folio().text_muted),
        });

    let tags = row(project.tags.iter().map(|t| chip(t))).spacing(SPACING_XS);

    let body = column![art, header, categories, description, tags]
        .spacing(SPACING_SM)
        .width(Length::Fixed(CARD_WIDTH));

    let card = container(body)
        .padding(SPACING_SM + SPACING_XS)
        .style(move |theme: &Theme| {
            let mut style = container_card(theme);
            if focused {
                style.border = Border {
                    color: theme.extended_palette().primary.base.color,
                    width: BORDER_WIDTH_MEDIUM,
                    ..style.border
                };
            }
            style
        });

    // Slide up as the card enters; fully settled at entrance == 1.0.
    let lift = (1.0 - entrance.clamp(0.0, 1.0)) * 16.0;

    column![
        Space::new().height(lift),
        button(card)
            .on_press(on_press)
            .padding(0.0)
            .style(|theme: &Theme, _status| button::Style {
                background: None,
                text_color: theme.extended_palette().background.base.text,
                ..button::Style::default()
            }),
    ]
    .into()
}

/// Pill badge for a category label.
fn badge<'a, M: 'a>(label: String) -> Element<'a, M> {
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
                color: iced::Color::TRANSPARENT,
            },
            ..Default::default()
        }
    })
    .into()
}

/// Muted chip for a technology tag.
fn chip<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(11).style(|theme: &Theme| {
        iced::widget::text::Style {
            color: Some(theme.folio().text_secondary),
        }
    }))
    .padding([2.0, SPACING_SM])
    .style(|theme: &Theme| {
        let folio = theme.folio();
        container::Style {
            background: Some(folio.background_inset.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: BORDER_WIDTH_THIN,
                color: folio.border_subtle,
            },
            ..Default::default()
        }
    })
    .into()
}
