//! Content source configuration.

use std::path::PathBuf;

/// Where the three JSON content resources live.
///
/// A remote source issues HTTP GET requests against a base URL; a local
/// source reads the same file names from a directory. The local variant is
/// the offline/development path and what the loader tests exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// HTTP base URL, without a trailing slash (e.g. `https://site/data`).
    Remote(String),
    /// Directory containing the JSON files.
    Local(PathBuf),
}

impl ContentSource {
    /// Parse a configuration string into a source.
    ///
    /// Strings starting with `http://` or `https://` are remote; anything
    /// else is treated as a directory path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.trim_end_matches('/').to_string())
        } else {
            Self::Local(PathBuf::from(value))
        }
    }

    /// Full location of a named resource under this source.
    pub fn locate(&self, resource: &str) -> String {
        match self {
            Self::Remote(base) => format!("{base}/{resource}"),
            Self::Local(dir) => dir.join(resource).display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_url_from_path() {
        assert_eq!(
            ContentSource::parse("https://example.com/data/"),
            ContentSource::Remote("https://example.com/data".to_string())
        );
        assert_eq!(
            ContentSource::parse("content"),
            ContentSource::Local(PathBuf::from("content"))
        );
    }

    #[test]
    fn locate_joins_resource_name() {
        let remote = ContentSource::Remote("https://example.com/data".to_string());
        assert_eq!(
            remote.locate("projects.json"),
            "https://example.com/data/projects.json"
        );
    }
}
