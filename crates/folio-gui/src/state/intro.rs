//! Intro section state: the typewriter headline.
//!
//! The typewriter cycles through a fixed list of phrases: type a phrase
//! character by character, hold it, delete it, move to the next. The state
//! machine is driven by the shared animation clock rather than per-character
//! timers, so a single `advance(now)` call catches up however many steps are
//! due.

use std::time::Instant;

use crate::constants::{DELETE_INTERVAL, HOLD_INTERVAL, TYPE_INTERVAL, TYPEWRITER_WORDS};

/// Typewriter phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Adding one character per step.
    Typing,
    /// Fully typed phrase held on screen.
    Holding,
    /// Removing one character per step.
    Deleting,
}

/// Intro section state.
#[derive(Debug, Clone)]
pub struct IntroState {
    pub typewriter: Typewriter,
}

impl IntroState {
    pub fn new(now: Instant) -> Self {
        Self {
            typewriter: Typewriter::new(TYPEWRITER_WORDS, now),
        }
    }
}

/// Cycling typewriter over a list of phrases.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
    next_at: Instant,
}

impl Typewriter {
    /// Create a typewriter starting empty on the first phrase.
    pub fn new(words: &[&str], now: Instant) -> Self {
        Self {
            words: words.iter().map(ToString::to_string).collect(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at: now + TYPE_INTERVAL,
        }
    }

    /// The currently visible prefix of the active phrase.
    pub fn display(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Advance the state machine, executing every step due by `now`.
    pub fn advance(&mut self, now: Instant) {
        if self.words.is_empty() {
            return;
        }
        while now >= self.next_at {
            self.step();
        }
    }

    /// Jump to the first phrase fully typed. Used when motion is reduced.
    pub fn show_full(&mut self) {
        if let Some(word) = self.words.get(self.word) {
            self.shown = word.chars().count();
            self.phase = Phase::Holding;
        }
    }

    fn step(&mut self) {
        let word_len = self.words[self.word].chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= word_len {
                    self.phase = Phase::Holding;
                    self.next_at += HOLD_INTERVAL;
                } else {
                    self.next_at += TYPE_INTERVAL;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.next_at += DELETE_INTERVAL;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.next_at += TYPE_INTERVAL;
                } else {
                    self.next_at += DELETE_INTERVAL;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn types_one_character_per_interval() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&["abc"], start);

        assert_eq!(tw.display(), "");
        tw.advance(at(start, 150));
        assert_eq!(tw.display(), "a");
        tw.advance(at(start, 300));
        assert_eq!(tw.display(), "ab");
        tw.advance(at(start, 450));
        assert_eq!(tw.display(), "abc");
    }

    #[test]
    fn holds_then_deletes_then_cycles() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&["ab", "xy"], start);

        // Fully typed at 300ms, held for 1500ms, then deletion begins.
        tw.advance(at(start, 300));
        assert_eq!(tw.display(), "ab");
        tw.advance(at(start, 1700));
        assert_eq!(tw.display(), "ab");

        // 300 (typed) + 1500 (hold) + 100 (phase flip) + 100 (first delete)
        tw.advance(at(start, 1900));
        assert_eq!(tw.display(), "a");
        tw.advance(at(start, 2000));
        assert_eq!(tw.display(), "");

        // Next phrase starts typing.
        tw.advance(at(start, 2150));
        assert_eq!(tw.display(), "x");
    }

    #[test]
    fn catches_up_over_a_large_gap() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&["hi"], start);
        // A long stall executes every due step instead of dropping them.
        tw.advance(at(start, 10_000));
        assert!(tw.display().len() <= 2);
    }

    #[test]
    fn show_full_displays_the_whole_phrase() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&["Full-Stack Developer"], start);
        tw.show_full();
        assert_eq!(tw.display(), "Full-Stack Developer");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&[], start);
        tw.advance(at(start, 5000));
        assert_eq!(tw.display(), "");
    }
}
