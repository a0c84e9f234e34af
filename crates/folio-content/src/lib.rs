//! Content loading for the portfolio application.
//!
//! The site content lives in three JSON resources: a project list, a
//! skills-by-category list, and a timeline list. This crate fetches and
//! parses them from a [`ContentSource`] (remote HTTP base URL or local
//! directory) and provides the built-in sample projects used as fallback
//! when the project resource cannot be loaded.

pub mod error;
pub mod loader;
pub mod sample;
pub mod source;

pub use error::ContentError;
pub use loader::{load_projects, load_skills, load_timeline};
pub use sample::sample_projects;
pub use source::ContentSource;

/// File name of the projects resource.
pub const PROJECTS_RESOURCE: &str = "projects.json";

/// File name of the skills resource.
pub const SKILLS_RESOURCE: &str = "skills.json";

/// File name of the timeline resource.
pub const TIMELINE_RESOURCE: &str = "timeline.json";
