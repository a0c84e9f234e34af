//! Global keyboard handling.
//!
//! Keys only matter while the detail dialog is up: Escape closes it, Tab and
//! Shift+Tab cycle the trapped focus, Enter activates the focused element.

use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use super::{gallery, page};
use crate::message::{GalleryMessage, Message};
use crate::state::AppState;

pub fn handle(state: &mut AppState, key: Key, modifiers: Modifiers) -> Task<Message> {
    if state.gallery.modal.is_closed() {
        return Task::none();
    }

    match key.as_ref() {
        Key::Named(Named::Escape) => gallery::handle(state, GalleryMessage::CloseRequested),
        Key::Named(Named::Tab) if modifiers.shift() => {
            gallery::handle(state, GalleryMessage::FocusPrevious)
        }
        Key::Named(Named::Tab) => gallery::handle(state, GalleryMessage::FocusNext),
        Key::Named(Named::Enter) => activate_focused(state),
        _ => Task::none(),
    }
}

/// Enter on the close button closes; Enter on a link opens it.
fn activate_focused(state: &mut AppState) -> Task<Message> {
    let Some(focus) = state.gallery.modal.focus() else {
        return Task::none();
    };
    if focus == 0 {
        return gallery::handle(state, GalleryMessage::CloseRequested);
    }

    let url = state.gallery.modal_project().and_then(|project| {
        let links: Vec<&String> = [project.links.demo.as_ref(), project.links.code.as_ref()]
            .into_iter()
            .flatten()
            .collect();
        links.get(focus - 1).map(|url| (*url).clone())
    });

    match url {
        Some(url) => page::handle_open_url(state, url),
        None => Task::none(),
    }
}
