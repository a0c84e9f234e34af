//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Dialog focus trap and Escape |
//! | System theme | Continuous | Always | Track OS appearance for System mode |
//! | Animation clock | 50ms | Motion enabled | Typewriter and entrance fades |
//! | Toast dismiss | 5 seconds | Toast visible | Auto-dismiss notifications |
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! condition is not met, avoiding unnecessary polling.

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::{system, time};

use crate::constants::ANIMATION_TICK;
use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        system_theme_subscription(),
        animation_subscription(state),
        toast_subscription(state),
    ])
}

fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

fn system_theme_subscription() -> Subscription<Message> {
    system::theme_changes().map(Message::SystemThemeChanged)
}

/// Animation clock.
///
/// The typewriter cycles indefinitely, so the clock runs whenever motion is
/// enabled and stops entirely under reduced motion.
fn animation_subscription(state: &AppState) -> Subscription<Message> {
    if state.needs_ticks() {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_some() {
        time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
    } else {
        Subscription::none()
    }
}
