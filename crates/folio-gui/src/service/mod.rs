//! Async services driven through `Task::perform`.
//!
//! Services never touch state directly; they produce messages that the
//! update path applies.

pub mod content;
pub mod sequence;
pub mod submit;

pub use sequence::{delay, sequence};
