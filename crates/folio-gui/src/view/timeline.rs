//! Timeline section: career milestones in source order.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::component::{error_state, loading_state};
use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, Section};
use crate::theme::{BORDER_RADIUS_FULL, SPACING_LG, SPACING_MD, SPACING_SM};

use super::skills::section_header;

pub fn view(state: &AppState) -> Element<'_, Message> {
    let header = section_header("Timeline", "Where I have been");

    let body: Element<'_, Message> = if let Some(reason) = &state.timeline.error {
        let error = GuiError::content_load("timeline.json", reason.clone());
        error_state(error.to_string(), error.suggestion(), None)
    } else if !state.timeline.loaded {
        loading_state("Loading timeline...")
    } else {
        let reduce_motion = state.settings.display.reduce_motion;
        let entries = state
            .timeline
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entrance =
                    state
                        .page
                        .item_progress(Section::Timeline, index, state.now, reduce_motion);
                timeline_entry(&entry.year, &entry.event, entrance)
            })
            .collect::<Vec<_>>();

        column(entries).spacing(SPACING_MD).into()
    };

    column![header, body].spacing(SPACING_LG).into()
}

fn timeline_entry<'a>(year: &'a str, event: &'a str, entrance: f32) -> Element<'a, Message> {
    let dot = container(Space::new().width(10.0).height(10.0)).style(move |theme: &Theme| {
        let primary = theme.extended_palette().primary.base.color;
        container::Style {
            background: Some(
                Color {
                    a: entrance.clamp(0.0, 1.0),
                    ..primary
                }
                .into(),
            ),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    });

    row![
        text(year)
            .size(14)
            .width(Length::Fixed(60.0))
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: Some(Color {
                    a: entrance.clamp(0.0, 1.0),
                    ..theme.extended_palette().primary.base.color
                }),
            }),
        dot,
        Space::new().width(SPACING_SM),
        text(event)
            .size(14)
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: Some(Color {
                    a: entrance.clamp(0.0, 1.0),
                    ..theme.extended_palette().background.base.text
                }),
            }),
    ]
    .align_y(Alignment::Center)
    .into()
}
