//! Reusable UI components.

pub mod empty_state;
pub mod project_card;
pub mod project_modal;
pub mod text_field;
pub mod toast;

pub use empty_state::{error_state, loading_state};
pub use project_card::project_card;
pub use project_modal::project_modal;
pub use text_field::TextField;
pub use toast::{ToastState, ToastType, view_toast};
