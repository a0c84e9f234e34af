//! Message handlers, organized by concern.
//!
//! Handlers are free functions over `&mut AppState` so they can be exercised
//! directly in tests without an Iced runtime.

pub mod contact;
pub mod content;
pub mod gallery;
pub mod keyboard;
pub mod page;
pub mod theme;
