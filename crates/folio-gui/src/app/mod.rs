//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Async work goes through `Task::perform`
//! - **Timed choreography is declarative** - `(delay, message)` sequences
//!   instead of nested timers

mod handler;
mod subscription;

use iced::widget::{container, stack};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use crate::component::{project_modal, view_toast};
use crate::constants::APP_NAME;
use crate::message::{Message, ToastMessage};
use crate::service;
use crate::state::{AppState, Settings};
use crate::theme::{SPACING_LG, portfolio_theme};
use crate::view::view_page;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the content
    /// loading tasks.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let source = settings.content.source();

        let app = Self {
            state: AppState::with_settings(settings),
        };
        let startup = service::content::load_all(&source);

        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Content loading
            Message::ProjectsLoaded(result) => {
                handler::content::handle_projects_loaded(&mut self.state, result)
            }
            Message::SkillsLoaded(result) => {
                handler::content::handle_skills_loaded(&mut self.state, result)
            }
            Message::TimelineLoaded(result) => {
                handler::content::handle_timeline_loaded(&mut self.state, result)
            }

            // Sections
            Message::Gallery(gallery_msg) => handler::gallery::handle(&mut self.state, gallery_msg),
            Message::Contact(contact_msg) => handler::contact::handle(&mut self.state, contact_msg),

            // Theme
            Message::ToggleTheme => handler::theme::handle_toggle(&mut self.state),
            Message::SystemThemeChanged(mode) => {
                handler::theme::handle_system_changed(&mut self.state, mode)
            }

            // Page
            Message::PageScrolled(viewport) => {
                handler::page::handle_scrolled(&mut self.state, viewport)
            }
            Message::ScrollTo(section) => handler::page::handle_scroll_to(&mut self.state, section),
            Message::Tick(now) => handler::page::handle_tick(&mut self.state, now),

            // Global events
            Message::KeyPressed(key, modifiers) => {
                handler::keyboard::handle(&mut self.state, key, modifiers)
            }
            Message::OpenUrl(url) => handler::page::handle_open_url(&mut self.state, url),
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    /// Build the view: the page, the detail dialog overlay, and any toast.
    pub fn view(&self) -> Element<'_, Message> {
        let mut base = view_page(&self.state);

        if let Some(project) = self.state.gallery.modal_project() {
            base = project_modal(base, project, &self.state.gallery.modal, self.state.now);
        }

        match &self.state.toast {
            Some(toast) => stack![
                base,
                container(view_toast(toast))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Alignment::End)
                    .align_y(Alignment::End)
                    .padding(SPACING_LG),
            ]
            .into(),
            None => base,
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        APP_NAME.to_string()
    }

    /// Current theme, derived from settings and the OS appearance.
    pub fn theme(&self) -> Theme {
        portfolio_theme(
            self.state.settings.display.theme.mode,
            self.state.system_is_dark,
        )
    }

    /// Application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
