//! Project gallery entries.

use serde::{Deserialize, Serialize};

/// A single portfolio project.
///
/// Deserialized from `projects.json`. Identity is [`Project::id`], unique
/// within the loaded array. All fields other than `id` and `title` are
/// optional in the source JSON and default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Unique identifier within the project list.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown on the card and in the modal.
    pub description: String,
    /// Image path or URL; empty means use the placeholder.
    pub image: String,
    /// Category tags driving the gallery filter (kebab-case identifiers).
    pub categories: Vec<String>,
    /// Free-form technology tags.
    pub tags: Vec<String>,
    /// External links for the project.
    pub links: ProjectLinks,
    /// Key feature bullet points shown in the modal.
    pub features: Vec<String>,
    /// Whether the card carries a "Featured" badge.
    pub featured: bool,
}

/// External links attached to a project.
///
/// The original JSON carried a free-form `links` object keyed by `demo`,
/// `code`, and `details`; `details` only ever pointed back at the modal, so
/// the typed model keeps the two real destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    /// Live demo URL.
    pub demo: Option<String>,
    /// Source code URL.
    pub code: Option<String>,
}

impl ProjectLinks {
    /// Whether any link is present.
    pub fn is_empty(&self) -> bool {
        self.demo.is_none() && self.code.is_none()
    }
}
