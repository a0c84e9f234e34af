//! Contact form messages.

/// Events from the contact form.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    /// The name field changed.
    NameChanged(String),
    /// The email field changed.
    EmailChanged(String),
    /// The message field changed.
    MessageChanged(String),
    /// The send button was pressed.
    Submit,
    /// The submission task finished.
    Finished(Result<(), String>),
    /// Dismiss the inline failure banner.
    DismissStatus,
}
