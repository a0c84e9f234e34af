//! Content loading errors.

use thiserror::Error;

/// Errors raised while fetching or parsing a content resource.
///
/// All variants are non-fatal to the application: the projects section
/// substitutes built-in sample data, the skills and timeline sections show
/// an inline message.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The HTTP request failed (transport error or non-2xx status).
    #[error("failed to fetch {resource}: {source}")]
    Fetch {
        /// Resource file name (e.g. `projects.json`).
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    /// The local content file could not be read.
    #[error("failed to read {resource}: {source}")]
    Read {
        /// Resource file name.
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource body was not valid JSON of the expected shape.
    #[error("failed to parse {resource}: {source}")]
    Parse {
        /// Resource file name.
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// The resource this error is about.
    pub fn resource(&self) -> &str {
        match self {
            Self::Fetch { resource, .. }
            | Self::Read { resource, .. }
            | Self::Parse { resource, .. } => resource,
        }
    }
}
