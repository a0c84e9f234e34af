//! Loader tests against local fixture content.

use std::path::PathBuf;

use folio_content::{
    ContentError, ContentSource, load_projects, load_skills, load_timeline, sample_projects,
};

fn fixture_source(subdir: &str) -> ContentSource {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests");
    dir.push("data");
    if !subdir.is_empty() {
        dir.push(subdir);
    }
    ContentSource::Local(dir)
}

#[tokio::test]
async fn loads_projects_from_local_directory() {
    let projects = load_projects(&fixture_source("")).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "terminal-portfolio");
    assert!(projects[0].featured);
    assert_eq!(projects[1].links.demo, None);
}

#[tokio::test]
async fn loads_skills_and_timeline() {
    let skills = load_skills(&fixture_source("")).await.unwrap();
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].category, "Frontend");

    let timeline = load_timeline(&fixture_source("")).await.unwrap();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].year, "2019");
}

#[tokio::test]
async fn missing_directory_is_a_read_error() {
    let source = ContentSource::Local(PathBuf::from("/nonexistent/folio-content-test"));
    let err = load_projects(&source).await.unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
    assert_eq!(err.resource(), "projects.json");
}

#[tokio::test]
async fn malformed_projects_is_a_parse_error() {
    let err = load_projects(&fixture_source("malformed")).await.unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
}

#[test]
fn gallery_fallback_is_never_empty() {
    // The fallback contract: a failed or empty load substitutes exactly
    // these two projects, so the grid never renders empty.
    let samples = sample_projects();
    assert_eq!(samples.len(), 2);
    assert!(samples.iter().all(|p| !p.title.is_empty()));
}
