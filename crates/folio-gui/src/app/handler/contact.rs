//! Contact form handlers.

use iced::Task;

use crate::component::ToastState;
use crate::message::{ContactMessage, Message};
use crate::service::submit::{self, Submission};
use crate::state::{AppState, ContactField};

pub fn handle(state: &mut AppState, message: ContactMessage) -> Task<Message> {
    match message {
        ContactMessage::NameChanged(value) => {
            state.contact.set_field(ContactField::Name, value);
            Task::none()
        }
        ContactMessage::EmailChanged(value) => {
            state.contact.set_field(ContactField::Email, value);
            Task::none()
        }
        ContactMessage::MessageChanged(value) => {
            state.contact.set_field(ContactField::Message, value);
            Task::none()
        }

        ContactMessage::Submit => {
            if !state.contact.begin_submit() {
                return Task::none();
            }
            let submission = Submission {
                name: state.contact.name.trim().to_string(),
                email: state.contact.email.trim().to_string(),
                message: state.contact.message.trim().to_string(),
            };
            submit::send(state.settings.contact.endpoint.clone(), submission)
        }

        ContactMessage::Finished(result) => {
            if let Err(reason) = &result {
                tracing::warn!(%reason, "Contact form delivery failed");
            } else {
                state.toast = Some(ToastState::success("Message sent. Thanks for reaching out!"));
            }
            state.contact.finish_submit(result);
            Task::none()
        }

        ContactMessage::DismissStatus => {
            state.contact.submit_error = None;
            Task::none()
        }
    }
}
