//! Contact section: validated form with inline errors. Delivery failures
//! show a dismissible banner under the form; success is announced as a
//! toast after the form resets.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::TextField;
use crate::message::{ContactMessage, Message};
use crate::state::{AppState, ContactField};
use crate::theme::{
    BORDER_RADIUS_SM, BORDER_WIDTH_THIN, PortfolioColors, SPACING_LG, SPACING_MD, SPACING_SM,
    button_ghost, button_primary,
};

use super::skills::section_header;

pub fn view(state: &AppState) -> Element<'_, Message> {
    let header = section_header("Get in Touch", "Have a project in mind? Say hello");
    let form = &state.contact;

    let name = TextField::new("Name", &form.name, "Your name", |s| {
        Message::Contact(ContactMessage::NameChanged(s))
    })
    .required(true)
    .disabled(form.in_flight)
    .error(
        form.visible_error(ContactField::Name)
            .map(|e| e.message(ContactField::Name)),
    )
    .view();

    let email = TextField::new("Email", &form.email, "you@example.com", |s| {
        Message::Contact(ContactMessage::EmailChanged(s))
    })
    .required(true)
    .disabled(form.in_flight)
    .error(
        form.visible_error(ContactField::Email)
            .map(|e| e.message(ContactField::Email)),
    )
    .view();

    let message = TextField::new("Message", &form.message, "What can I help with?", |s| {
        Message::Contact(ContactMessage::MessageChanged(s))
    })
    .required(true)
    .disabled(form.in_flight)
    .error(
        form.visible_error(ContactField::Message)
            .map(|e| e.message(ContactField::Message)),
    )
    .view();

    let send_label = if form.in_flight {
        "Sending..."
    } else {
        "Send Message"
    };
    let mut send = button(
        row![
            lucide::send().size(14),
            Space::new().width(SPACING_SM),
            text(send_label).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_primary);
    if !form.in_flight {
        send = send.on_press(Message::Contact(ContactMessage::Submit));
    }

    let mut body = column![name, email, message, send]
        .spacing(SPACING_MD)
        .max_width(520.0);

    if let Some(reason) = &form.submit_error {
        body = body.push(failure_banner(reason));
    }

    column![header, body].spacing(SPACING_LG).into()
}

fn failure_banner(reason: &str) -> Element<'_, Message> {
    container(
        row![
            lucide::circle_x()
                .size(16)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
            Space::new().width(SPACING_SM),
            text(reason).size(13),
            Space::new().width(Length::Fill),
            button(lucide::x().size(12))
                .on_press(Message::Contact(ContactMessage::DismissStatus))
                .padding([2.0, 4.0])
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
                color: theme.extended_palette().danger.base.color,
            },
            ..Default::default()
        }
    })
    .into()
}
