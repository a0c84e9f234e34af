//! Application state.
//!
//! All state lives here; views are pure functions over it and every change
//! happens in the update path.

pub mod contact;
pub mod gallery;
pub mod intro;
pub mod page;
pub mod settings;
pub mod skills;
pub mod timeline;

pub use contact::{ContactField, ContactState, FieldError};
pub use gallery::{GalleryState, LoadPhase, ModalState};
pub use intro::{IntroState, Typewriter};
pub use page::{PageState, Section};
pub use settings::{ContactSettings, ContentSettings, DisplaySettings, Settings};
pub use skills::SkillsState;
pub use timeline::TimelineState;

use std::time::Instant;

use crate::component::toast::ToastState;

/// Root application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Persisted user preferences.
    pub settings: Settings,
    /// Current OS appearance, tracked via subscription.
    pub system_is_dark: bool,
    /// Shared animation clock, advanced by tick messages.
    pub now: Instant,
    /// Scroll position and section reveals.
    pub page: PageState,
    /// Intro section (typewriter headline).
    pub intro: IntroState,
    /// Project gallery and detail dialog.
    pub gallery: GalleryState,
    /// Skills section.
    pub skills: SkillsState,
    /// Timeline section.
    pub timeline: TimelineState,
    /// Contact form.
    pub contact: ContactState,
    /// Transient notification, if any.
    pub toast: Option<ToastState>,
}

impl AppState {
    /// Create the initial state from loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        let now = Instant::now();
        let mut intro = IntroState::new(now);
        if settings.display.reduce_motion {
            intro.typewriter.show_full();
        }

        Self {
            settings,
            system_is_dark: false,
            now,
            page: PageState::new(now),
            intro,
            gallery: GalleryState::default(),
            skills: SkillsState::default(),
            timeline: TimelineState::default(),
            contact: ContactState::default(),
            toast: None,
        }
    }

    /// Whether the effective appearance is dark.
    pub fn is_dark(&self) -> bool {
        self.settings.display.theme.is_dark(self.system_is_dark)
    }

    /// Whether the animation clock needs to run.
    ///
    /// The typewriter cycles indefinitely, so this is true whenever motion is
    /// not reduced.
    pub fn needs_ticks(&self) -> bool {
        !self.settings.display.reduce_motion
    }
}
