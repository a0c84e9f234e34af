//! Page-level handlers: scrolling, the animation clock, and link opening.

use std::time::Instant;

use iced::Task;
use iced::widget::operation;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};

use crate::component::ToastState;
use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, Section};
use crate::view::page_scroll_id;

pub fn handle_scrolled(state: &mut AppState, viewport: Viewport) -> Task<Message> {
    let offset = viewport.absolute_offset();
    state.page.record_scroll(
        offset.y,
        viewport.bounds().height,
        viewport.content_bounds().height,
        Instant::now(),
    );
    Task::none()
}

pub fn handle_scroll_to(state: &mut AppState, section: Section) -> Task<Message> {
    operation::scroll_to(
        page_scroll_id(),
        AbsoluteOffset {
            x: 0.0,
            y: state.page.scroll_target(section),
        },
    )
}

pub fn handle_tick(state: &mut AppState, now: Instant) -> Task<Message> {
    state.now = now;
    if !state.settings.display.reduce_motion {
        state.intro.typewriter.advance(now);
    }
    Task::none()
}

pub fn handle_open_url(state: &mut AppState, url: String) -> Task<Message> {
    if let Err(error) = open::that(&url) {
        tracing::warn!(%url, %error, "Could not open link");
        state.toast = Some(ToastState::error(GuiError::OpenLink { url }.to_string()));
    } else {
        tracing::info!(%url, "Opened link in browser");
    }
    Task::none()
}
