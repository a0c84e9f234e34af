//! Application messages.
//!
//! The root [`Message`] enum covers global concerns (content loads, theme,
//! scrolling, the animation clock); section-specific messages live in their
//! own enums and are wrapped by a root variant.

pub mod contact;
pub mod gallery;

pub use contact::ContactMessage;
pub use gallery::GalleryMessage;

use std::time::Instant;

use iced::keyboard;
use iced::widget::scrollable;

use folio_model::{Project, SkillCategory, TimelineEntry};

use crate::state::Section;

/// Root application message.
#[derive(Debug, Clone)]
pub enum Message {
    // === Content loading ===
    /// Project list finished loading.
    ProjectsLoaded(Result<Vec<Project>, String>),
    /// Skill categories finished loading.
    SkillsLoaded(Result<Vec<SkillCategory>, String>),
    /// Timeline entries finished loading.
    TimelineLoaded(Result<Vec<TimelineEntry>, String>),

    // === Sections ===
    /// Project gallery events.
    Gallery(GalleryMessage),
    /// Contact form events.
    Contact(ContactMessage),

    // === Theme ===
    /// The theme toggle button was pressed.
    ToggleTheme,
    /// The OS switched between light and dark appearance.
    SystemThemeChanged(iced::theme::Mode),

    // === Page ===
    /// The page scrollable reported a new viewport.
    PageScrolled(scrollable::Viewport),
    /// Smooth-scroll the page to a section.
    ScrollTo(Section),
    /// Animation clock tick.
    Tick(Instant),

    // === Global events ===
    /// A key was pressed anywhere in the window.
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    /// Open a URL in the system browser.
    OpenUrl(String),
    /// Toast notification events.
    Toast(ToastMessage),
    /// No-op placeholder for ignored events.
    Noop,
}

/// Toast notification events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the current toast.
    Dismiss,
}
