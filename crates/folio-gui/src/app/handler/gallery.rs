//! Project gallery handlers.
//!
//! Dialog timing is expressed as `(delay, message)` steps through the
//! sequence service; every produced message re-validates against the state
//! machine, so timers left over from an earlier dialog are harmless.

use std::time::Instant;

use iced::Task;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;

use crate::constants::{MODAL_ACTIVATE_DELAY, MODAL_CLOSE_ANIMATION};
use crate::message::{GalleryMessage, Message};
use crate::service;
use crate::state::{AppState, GalleryState, LoadPhase, Section};
use crate::view::page_scroll_id;

pub fn handle(state: &mut AppState, message: GalleryMessage) -> Task<Message> {
    match message {
        GalleryMessage::FilterSelected(filter) => {
            if state.gallery.select_filter(filter) {
                tracing::debug!(filter = %state.gallery.active_filter.as_str(), "Gallery filter changed");
            }
            Task::none()
        }

        GalleryMessage::ToggleExpanded => {
            state.gallery.expanded = !state.gallery.expanded;
            if state.gallery.expanded {
                Task::none()
            } else {
                // Collapsing can leave the viewport past the grid; scroll
                // back to the top of the section.
                operation::scroll_to(
                    page_scroll_id(),
                    AbsoluteOffset {
                        x: 0.0,
                        y: state.page.scroll_target(Section::Projects),
                    },
                )
            }
        }

        GalleryMessage::CardPressed(index) => {
            let project_id = state
                .gallery
                .visible()
                .get(index)
                .map(|p| p.id.clone());
            let Some(project_id) = project_id else {
                return Task::none();
            };
            if state.gallery.modal.request_open(project_id, index) {
                state.gallery.return_focus = None;
                service::sequence(vec![(
                    MODAL_ACTIVATE_DELAY,
                    Message::Gallery(GalleryMessage::ModalActivated),
                )])
            } else {
                // A dialog is already up; the press is ignored.
                Task::none()
            }
        }

        GalleryMessage::ModalActivated => {
            state.gallery.modal.activate();
            Task::none()
        }

        GalleryMessage::CloseRequested => {
            if state.gallery.modal.request_close(Instant::now()) {
                service::sequence(vec![(
                    MODAL_CLOSE_ANIMATION,
                    Message::Gallery(GalleryMessage::ModalDetached),
                )])
            } else {
                Task::none()
            }
        }

        GalleryMessage::ModalDetached => {
            if let Some(trigger) = state.gallery.modal.detach() {
                // Hand keyboard focus back to the card that opened the dialog.
                state.gallery.return_focus = Some(trigger);
            }
            Task::none()
        }

        GalleryMessage::FocusNext => {
            let count = focusable_count(state);
            state.gallery.modal.focus_next(count);
            Task::none()
        }

        GalleryMessage::FocusPrevious => {
            let count = focusable_count(state);
            state.gallery.modal.focus_previous(count);
            Task::none()
        }

        GalleryMessage::Retry => {
            tracing::info!("Retrying project load");
            state.gallery.phase = LoadPhase::Loading;
            service::content::load_projects(state.settings.content.source())
        }
    }
}

fn focusable_count(state: &AppState) -> usize {
    state
        .gallery
        .modal_project()
        .map(GalleryState::focusable_count)
        .unwrap_or(0)
}
