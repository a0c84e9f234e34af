//! Portfolio content model types.
//!
//! This crate provides the typed representations of the three JSON content
//! resources consumed by the application:
//!
//! - [`Project`]: portfolio gallery entries with categories, tags, and links
//! - [`SkillCategory`]: skill groups with 0-100 proficiency levels
//! - [`TimelineEntry`]: year/event pairs in chronological array order
//!
//! All types are read-only snapshots deserialized once per load; nothing
//! here carries a mutation lifecycle.

use serde::{Deserialize, Serialize};

pub mod project;
pub mod skill;
pub mod timeline;

pub use project::{Project, ProjectLinks};
pub use skill::{Skill, SkillCategory};
pub use timeline::TimelineEntry;

/// Title-case a hyphen-separated category identifier for display.
///
/// Category identifiers are stored in kebab-case (`"web-design"`) and
/// displayed with each word capitalized (`"Web Design"`).
///
/// # Example
///
/// ```
/// use folio_model::format_category;
///
/// assert_eq!(format_category("web-design"), "Web Design");
/// assert_eq!(format_category("mobile"), "Mobile");
/// ```
pub fn format_category(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The synthetic filter tag matching every project.
pub const FILTER_ALL: &str = "all";

/// A category filter over a project list.
///
/// Exactly one filter is active at a time in the gallery; [`FILTER_ALL`]
/// matches every project, any other value matches projects whose category
/// set contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    /// The filter that matches every project.
    pub fn all() -> Self {
        Self(FILTER_ALL.to_string())
    }

    /// A filter for a single category tag.
    pub fn category(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the synthetic "all" filter.
    pub fn is_all(&self) -> bool {
        self.0 == FILTER_ALL
    }

    /// Display label for the filter button.
    pub fn label(&self) -> String {
        format_category(&self.0)
    }

    /// Check whether a project passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        self.is_all() || project.categories.iter().any(|c| c == &self.0)
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Collect the distinct category tags of a project list, in first-seen
/// order, with the synthetic "all" tag prepended.
pub fn distinct_filters(projects: &[Project]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::all()];
    for project in projects {
        for category in &project.categories {
            if !filters.iter().any(|f| f.as_str() == category) {
                filters.push(CategoryFilter::category(category.clone()));
            }
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_categories(id: &str, categories: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            ..Project::default()
        }
    }

    #[test]
    fn format_category_title_cases_hyphenated_words() {
        assert_eq!(format_category("web-design"), "Web Design");
        assert_eq!(format_category("all"), "All");
        assert_eq!(format_category(""), "");
    }

    #[test]
    fn distinct_filters_preserves_first_seen_order() {
        let projects = vec![
            project_with_categories("a", &["web", "frontend"]),
            project_with_categories("b", &["mobile", "web"]),
        ];
        let filters = distinct_filters(&projects);
        let tags: Vec<&str> = filters.iter().map(CategoryFilter::as_str).collect();
        assert_eq!(tags, vec!["all", "web", "frontend", "mobile"]);
    }

    #[test]
    fn all_filter_matches_everything() {
        let project = project_with_categories("a", &["web"]);
        assert!(CategoryFilter::all().matches(&project));
        assert!(CategoryFilter::category("web").matches(&project));
        assert!(!CategoryFilter::category("mobile").matches(&project));
    }
}
