//! Projects section: filter chips, the card grid, and progressive disclosure.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{error_state, loading_state, project_card};
use crate::constants::GALLERY_COLUMNS;
use crate::message::{GalleryMessage, Message};
use crate::state::{AppState, LoadPhase, Section};
use crate::theme::{
    BORDER_RADIUS_SM, BORDER_WIDTH_THIN, PortfolioColors, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, button_primary, button_secondary, button_ghost,
};

use super::skills::section_header;

pub fn view(state: &AppState) -> Element<'_, Message> {
    let header = section_header("Projects", "Selected work, filter by category");

    if matches!(state.gallery.phase, LoadPhase::Loading) {
        return column![header, loading_state("Loading projects...")]
            .spacing(SPACING_LG)
            .into();
    }

    let filters = row(state.gallery.filters.iter().map(|filter| {
        let active = *filter == state.gallery.active_filter;
        button(text(filter.label()).size(13))
            .on_press(Message::Gallery(GalleryMessage::FilterSelected(
                filter.clone(),
            )))
            .padding([6.0, 14.0])
            .style(if active { button_primary } else { button_secondary })
            .into()
    }))
    .spacing(SPACING_SM);

    let visible = state.gallery.visible();
    let grid: Element<'_, Message> = if visible.is_empty() {
        error_state(
            "No projects match this filter.".to_string(),
            "Try another category.",
            None,
        )
    } else {
        let reduce_motion = state.settings.display.reduce_motion;
        let rows = visible
            .chunks(GALLERY_COLUMNS)
            .enumerate()
            .map(|(row_index, chunk)| {
                row(chunk.iter().enumerate().map(|(col, project)| {
                    let index = row_index * GALLERY_COLUMNS + col;
                    let entrance =
                        state
                            .page
                            .item_progress(Section::Projects, index, state.now, reduce_motion);
                    let focused = state.gallery.return_focus == Some(index);
                    project_card(
                        project,
                        Message::Gallery(GalleryMessage::CardPressed(index)),
                        entrance,
                        focused,
                    )
                }))
                .spacing(SPACING_LG)
                .into()
            })
            .collect::<Vec<_>>();

        column(rows).spacing(SPACING_LG).into()
    };

    let mut section = column![header, filters, grid].spacing(SPACING_LG);

    // Notice when the built-in samples are standing in for real content.
    if let LoadPhase::SampleFallback { reason } = &state.gallery.phase {
        section = section.push(fallback_notice(reason));
    }

    let hidden = state.gallery.hidden_count();
    if hidden > 0 || state.gallery.expanded {
        let label = if state.gallery.expanded {
            "Show less".to_string()
        } else {
            format!("Show more ({hidden})")
        };
        section = section.push(
            container(
                button(
                    row![
                        text(label).size(13),
                        Space::new().width(SPACING_XS),
                        if state.gallery.expanded {
                            lucide::chevron_up().size(14)
                        } else {
                            lucide::chevron_down().size(14)
                        },
                    ]
                    .align_y(Alignment::Center),
                )
                .on_press(Message::Gallery(GalleryMessage::ToggleExpanded))
                .padding([8.0, 18.0])
                .style(button_secondary),
            )
            .width(Length::Fill)
            .align_x(Alignment::Center),
        );
    }

    section.into()
}

fn fallback_notice<'a>(reason: &'a str) -> Element<'a, Message> {
    container(
        row![
            lucide::info()
                .size(14)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().warning.base.color),
                }),
            Space::new().width(SPACING_SM),
            text(format!("Showing sample projects. {reason}"))
                .size(12)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.folio().text_secondary),
                }),
            Space::new().width(Length::Fill),
            button(text("Retry").size(12))
                .on_press(Message::Gallery(GalleryMessage::Retry))
                .padding([4.0, 10.0])
                .style(button_ghost),
        ]
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(|theme: &Theme| {
        let folio = theme.folio();
        container::Style {
            background: Some(folio.background_secondary.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: BORDER_WIDTH_THIN,
                color: folio.border_subtle,
            },
            ..Default::default()
        }
    })
    .into()
}
