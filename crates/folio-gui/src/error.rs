//! GUI-specific error types.
//!
//! A unified error type for operations surfaced in the UI, with user-facing
//! messages and actionable suggestions.

use thiserror::Error;

/// GUI-specific errors.
///
/// These errors are meant to be shown to the user, either inline in the
/// section that failed or as a toast notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// A content resource failed to load.
    #[error("Failed to load {resource}: {reason}")]
    ContentLoad {
        /// Resource file name (e.g. "projects.json").
        resource: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The contact form submission failed.
    #[error("Failed to send message: {reason}")]
    Submit {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    /// A project link could not be opened in the browser.
    #[error("Failed to open link: {url}")]
    OpenLink {
        /// The URL that could not be opened.
        url: String,
    },
}

impl GuiError {
    /// Create a content load error.
    pub fn content_load(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContentLoad {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a submission error.
    pub fn submit(reason: impl Into<String>) -> Self {
        Self::Submit {
            reason: reason.into(),
        }
    }

    /// A short, actionable suggestion for resolving the error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::ContentLoad { .. } => "Check the content source in settings and retry.",
            Self::Submit { .. } => "Check your network connection and try again.",
            Self::SettingsSave { .. } => "Check that the config directory is writable.",
            Self::OpenLink { .. } => "Copy the link and open it manually.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_load_message_names_the_resource() {
        let err = GuiError::content_load("projects.json", "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to load projects.json: connection refused"
        );
    }

    #[test]
    fn every_error_has_a_suggestion() {
        assert!(!GuiError::submit("timeout").suggestion().is_empty());
        assert!(
            GuiError::content_load("skills.json", "404")
                .suggestion()
                .contains("content source")
        );
    }
}
