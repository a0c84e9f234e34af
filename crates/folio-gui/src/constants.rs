//! Application-wide constants.

use std::time::Duration;

/// Application display name.
pub const APP_NAME: &str = "Folio Studio";

/// Number of project cards shown before "Show more" expands the grid.
pub const VISIBLE_COLLAPSED: usize = 3;

/// Number of columns in the project grid.
pub const GALLERY_COLUMNS: usize = 3;

/// Delay between a card press and the dialog becoming active.
///
/// The dialog mounts invisible first so its entrance transition has a
/// starting frame to animate from.
pub const MODAL_ACTIVATE_DELAY: Duration = Duration::from_millis(10);

/// Duration of the dialog exit transition before it is detached.
pub const MODAL_CLOSE_ANIMATION: Duration = Duration::from_millis(300);

/// Rotating phrases typed out under the intro heading.
pub const TYPEWRITER_WORDS: &[&str] = &[
    "Full-Stack Developer",
    "Open Source Contributor",
    "Problem Solver",
    "Creative Coder",
];

/// Interval between typed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(150);

/// Interval between deleted characters.
pub const DELETE_INTERVAL: Duration = Duration::from_millis(100);

/// Hold time on a fully typed phrase before deletion starts.
pub const HOLD_INTERVAL: Duration = Duration::from_millis(1500);

/// Simulated network delay when no contact endpoint is configured.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Minimum time a submission stays in flight, so the sending state is
/// visible even against a fast (or instantly failing) endpoint.
pub const MIN_SUBMIT_DURATION: Duration = Duration::from_millis(600);

/// Animation clock granularity while anything is animating.
pub const ANIMATION_TICK: Duration = Duration::from_millis(50);

/// Duration of a section's entrance fade.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Per-item delay for staggered entrances inside a section.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Contact form limits.
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MESSAGE_MIN_CHARS: usize = 10;
