//! Skills section: categories of skills with animated level bars.

use iced::widget::{Space, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use folio_model::Skill;

use crate::component::{error_state, loading_state};
use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, Section};
use crate::theme::spacing::LEVEL_BAR_HEIGHT;
use crate::theme::{
    PortfolioColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, container_card,
    progress_bar_primary,
};

pub fn view(state: &AppState) -> Element<'_, Message> {
    let header = section_header("Skills", "Technologies I work with");

    let body: Element<'_, Message> = if let Some(reason) = &state.skills.error {
        // No retry here; skills are not critical enough to block on.
        let error = GuiError::content_load("skills.json", reason.clone());
        error_state(error.to_string(), error.suggestion(), None)
    } else if !state.skills.loaded {
        loading_state("Loading skills...")
    } else {
        let cards = state
            .skills
            .categories
            .iter()
            .map(|category| {
                let skills = category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| skill_row(state, skill, i))
                    .collect::<Vec<_>>();

                container(
                    column![
                        row![
                            category_icon(&category.icon),
                            Space::new().width(SPACING_SM),
                            text(&category.category).size(16),
                        ]
                        .align_y(Alignment::Center),
                        column(skills).spacing(SPACING_SM),
                    ]
                    .spacing(SPACING_MD),
                )
                .padding(SPACING_MD)
                .width(Length::FillPortion(1))
                .style(container_card)
                .into()
            })
            .collect::<Vec<_>>();

        row(cards).spacing(SPACING_LG).into()
    };

    column![header, body].spacing(SPACING_LG).into()
}

fn skill_row<'a>(state: &'a AppState, skill: &'a Skill, index: usize) -> Element<'a, Message> {
    // The bar grows from zero to the skill level as the section enters.
    let entrance = state.page.item_progress(
        Section::Skills,
        index,
        state.now,
        state.settings.display.reduce_motion,
    );
    let value = skill.level_fraction() * entrance;

    column![
        row![
            text(&skill.name).size(13),
            Space::new().width(Length::Fill),
            text(format!("{}%", skill.level)).size(12).style(
                |theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.folio().text_muted),
                }
            ),
        ],
        progress_bar(0.0..=1.0, value)
            .girth(LEVEL_BAR_HEIGHT)
            .style(progress_bar_primary),
    ]
    .spacing(SPACING_XS)
    .into()
}

/// Map a content icon name to a Lucide glyph, with a generic fallback.
fn category_icon<'a>(name: &str) -> Element<'a, Message> {
    let glyph = match name {
        "screen" | "monitor" | "frontend" => lucide::monitor(),
        "gear" | "backend" | "server" => lucide::server(),
        "mobile" | "phone" => lucide::smartphone(),
        "tools" | "wrench" => lucide::wrench(),
        "cloud" => lucide::cloud(),
        "database" | "db" => lucide::database(),
        "design" | "palette" => lucide::palette(),
        _ => lucide::code(),
    };
    glyph
        .size(18)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        })
        .into()
}

pub(super) fn section_header<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(28),
        text(subtitle)
            .size(14)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.folio().text_muted),
            }),
    ]
    .spacing(SPACING_XS)
    .into()
}
