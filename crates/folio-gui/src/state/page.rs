//! Page scroll position and section entrance tracking.
//!
//! The page is a single scrollable column of sections. Each section fades in
//! the first time it scrolls into view and stays revealed afterwards, so
//! scrolling back up never replays an entrance.

use std::time::Instant;

use crate::constants::{REVEAL_DURATION, REVEAL_STAGGER};

/// How far ahead of the viewport bottom a section is considered visible,
/// as a fraction of the scrollable range.
const REVEAL_LEAD: f32 = 0.05;

// =============================================================================
// SECTIONS
// =============================================================================

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Timeline,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Skills,
        Self::Projects,
        Self::Timeline,
        Self::Contact,
    ];

    /// Approximate start of the section as a fraction of the scrollable range.
    pub fn threshold(self) -> f32 {
        match self {
            Self::Hero => 0.0,
            Self::Skills => 0.10,
            Self::Projects => 0.32,
            Self::Timeline => 0.58,
            Self::Contact => 0.78,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::Timeline => 3,
            Self::Contact => 4,
        }
    }
}

// =============================================================================
// PAGE STATE
// =============================================================================

/// Scroll metrics and per-section reveal timestamps.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Current vertical scroll offset in pixels.
    pub offset_y: f32,
    /// Height of the visible viewport.
    pub viewport_height: f32,
    /// Total height of the page content.
    pub content_height: f32,
    /// When each section first entered the viewport, if it has.
    revealed_at: [Option<Instant>; 5],
}

impl PageState {
    /// Create the initial page state. The hero is revealed immediately.
    pub fn new(now: Instant) -> Self {
        let mut state = Self {
            offset_y: 0.0,
            viewport_height: 0.0,
            content_height: 0.0,
            revealed_at: [None; 5],
        };
        state.update_reveals(now);
        state
    }

    /// Record a scroll event and reveal any sections that entered view.
    pub fn record_scroll(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
        now: Instant,
    ) {
        self.offset_y = offset_y;
        self.viewport_height = viewport_height;
        self.content_height = content_height;
        self.update_reveals(now);
    }

    /// Scroll progress through the page, 0.0 at the top and 1.0 at the bottom.
    pub fn progress(&self) -> f32 {
        let range = (self.content_height - self.viewport_height).max(1.0);
        (self.offset_y / range).clamp(0.0, 1.0)
    }

    fn update_reveals(&mut self, now: Instant) {
        let visible_edge = self.progress() + REVEAL_LEAD;
        for section in Section::ALL {
            let slot = &mut self.revealed_at[section.index()];
            if slot.is_none() && section.threshold() <= visible_edge {
                *slot = Some(now);
            }
        }
    }

    /// Whether a section has entered the viewport at least once.
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_at[section.index()].is_some()
    }

    /// Entrance progress of a section in `0.0..=1.0`.
    ///
    /// Returns 0.0 while unrevealed and jumps straight to 1.0 when motion is
    /// reduced.
    pub fn reveal_progress(&self, section: Section, now: Instant, reduce_motion: bool) -> f32 {
        let Some(start) = self.revealed_at[section.index()] else {
            return 0.0;
        };
        if reduce_motion {
            return 1.0;
        }
        entrance_progress(start, now, 0)
    }

    /// Entrance progress of the `index`-th item inside a section, with each
    /// item delayed slightly behind the previous one.
    pub fn item_progress(
        &self,
        section: Section,
        index: usize,
        now: Instant,
        reduce_motion: bool,
    ) -> f32 {
        let Some(start) = self.revealed_at[section.index()] else {
            return 0.0;
        };
        if reduce_motion {
            return 1.0;
        }
        entrance_progress(start, now, index)
    }

    /// Scroll offset in pixels that puts a section at the top of the viewport.
    pub fn scroll_target(&self, section: Section) -> f32 {
        let range = (self.content_height - self.viewport_height).max(0.0);
        section.threshold() * range
    }
}

fn entrance_progress(start: Instant, now: Instant, index: usize) -> f32 {
    let elapsed = now.duration_since(start).as_secs_f32();
    let delay = REVEAL_STAGGER.as_secs_f32() * index as f32;
    ((elapsed - delay) / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn only_the_hero_is_revealed_at_startup() {
        let page = PageState::new(Instant::now());
        assert!(page.is_revealed(Section::Hero));
        assert!(!page.is_revealed(Section::Skills));
        assert!(!page.is_revealed(Section::Contact));
    }

    #[test]
    fn scrolling_down_reveals_sections_in_order() {
        let now = Instant::now();
        let mut page = PageState::new(now);

        page.record_scroll(1000.0, 780.0, 5000.0, now);
        assert!(page.is_revealed(Section::Skills));
        assert!(!page.is_revealed(Section::Contact));

        page.record_scroll(4220.0, 780.0, 5000.0, now);
        assert!(page.is_revealed(Section::Contact));
    }

    #[test]
    fn reveals_fire_only_once() {
        let now = Instant::now();
        let mut page = PageState::new(now);
        page.record_scroll(4220.0, 780.0, 5000.0, now);
        assert!(page.is_revealed(Section::Timeline));

        // Scrolling back up does not undo the reveal.
        page.record_scroll(0.0, 780.0, 5000.0, now + Duration::from_secs(1));
        assert!(page.is_revealed(Section::Timeline));
    }

    #[test]
    fn reveal_progress_ramps_and_saturates() {
        let now = Instant::now();
        let page = PageState::new(now);

        assert_eq!(page.reveal_progress(Section::Hero, now, false), 0.0);
        let mid = page.reveal_progress(Section::Hero, now + Duration::from_millis(300), false);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(
            page.reveal_progress(Section::Hero, now + Duration::from_secs(2), false),
            1.0
        );
    }

    #[test]
    fn reduced_motion_skips_the_ramp() {
        let now = Instant::now();
        let page = PageState::new(now);
        assert_eq!(page.reveal_progress(Section::Hero, now, true), 1.0);
        // Unrevealed sections stay hidden regardless.
        assert_eq!(page.reveal_progress(Section::Contact, now, true), 0.0);
    }

    #[test]
    fn staggered_items_lag_behind_the_first() {
        let now = Instant::now();
        let page = PageState::new(now);
        let later = now + Duration::from_millis(300);

        let first = page.item_progress(Section::Hero, 0, later, false);
        let third = page.item_progress(Section::Hero, 2, later, false);
        assert!(first > third);
    }
}
