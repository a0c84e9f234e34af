//! Folio Studio - Desktop Portfolio Application
//!
//! A single-window portfolio app: animated intro, skills overview, filterable
//! project gallery with a detail dialog, career timeline, and a contact form.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use folio_gui::app::App;
use folio_gui::constants::APP_NAME;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting {APP_NAME}");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 780.0),
            min_size: Some(Size::new(860.0, 600.0)),
            ..Default::default()
        })
        .run()
}
