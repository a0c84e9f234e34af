//! Folio Studio GUI library.
//!
//! The application follows the Elm architecture: all state lives in
//! [`state::AppState`], every change goes through [`app::App::update`], and
//! views are pure functions over the state.

pub mod app;
pub mod component;
pub mod constants;
pub mod error;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
