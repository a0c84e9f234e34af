//! Hero section: greeting, typewriter headline, and primary actions.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Color, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{AppState, Section};
use crate::theme::{
    PortfolioColors, SPACING_MD, SPACING_SM, SPACING_XL, button_ghost, button_primary,
    button_secondary,
};

pub fn view(state: &AppState) -> Element<'_, Message> {
    let entrance = state
        .page
        .reveal_progress(Section::Hero, state.now, state.settings.display.reduce_motion);

    let theme_icon: Element<'_, Message> = if state.is_dark() {
        lucide::sun().size(18).into()
    } else {
        lucide::moon().size(18).into()
    };

    let top_bar = row![
        text("folio.dev").size(14).style(|theme: &Theme| {
            iced::widget::text::Style {
                color: Some(theme.folio().text_muted),
            }
        }),
        Space::new().width(Length::Fill),
        button(theme_icon)
            .on_press(Message::ToggleTheme)
            .padding([6.0, 10.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let greeting = faded_text("Hi, my name is", 16, entrance, |folio| folio.text_muted);

    let name = text("Alex Morgan")
        .size(44)
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(with_alpha(
                theme.extended_palette().background.base.text,
                entrance,
            )),
        });

    let typed = state.intro.typewriter.display();
    let headline = row![
        text(typed).size(24).style(move |theme: &Theme| {
            iced::widget::text::Style {
                color: Some(with_alpha(
                    theme.extended_palette().primary.base.color,
                    entrance,
                )),
            }
        }),
        text("|").size(24).style(|theme: &Theme| {
            iced::widget::text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            }
        }),
    ];

    let tagline = faded_text(
        "I build reliable software and thoughtful interfaces.",
        16,
        entrance,
        |folio| folio.text_secondary,
    );

    let actions = row![
        button(text("View Projects").size(14))
            .on_press(Message::ScrollTo(Section::Projects))
            .padding([10.0, 20.0])
            .style(button_primary),
        button(text("Get in Touch").size(14))
            .on_press(Message::ScrollTo(Section::Contact))
            .padding([10.0, 20.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM);

    column![
        top_bar,
        Space::new().height(SPACING_XL),
        greeting,
        name,
        headline,
        Space::new().height(SPACING_SM),
        tagline,
        Space::new().height(SPACING_MD),
        actions,
    ]
    .spacing(SPACING_SM)
    .into()
}

fn faded_text<'a>(
    content: &'a str,
    size: u16,
    entrance: f32,
    pick: impl Fn(&crate::theme::PortfolioColorSet) -> Color + 'a,
) -> Element<'a, Message> {
    text(content)
        .size(u32::from(size))
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(with_alpha(pick(&theme.folio()), entrance)),
        })
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
