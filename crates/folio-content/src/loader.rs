//! Async loaders for the three content resources.

use serde::de::DeserializeOwned;

use folio_model::{Project, SkillCategory, TimelineEntry};

use crate::error::ContentError;
use crate::source::ContentSource;
use crate::{PROJECTS_RESOURCE, SKILLS_RESOURCE, TIMELINE_RESOURCE};

/// Load the project list.
///
/// Callers decide the fallback policy; per the site contract the gallery
/// substitutes [`crate::sample_projects`] on error or an empty list, so the
/// page never shows an empty grid purely from a load failure.
pub async fn load_projects(source: &ContentSource) -> Result<Vec<Project>, ContentError> {
    load_resource(source, PROJECTS_RESOURCE).await
}

/// Load the skills-by-category list.
pub async fn load_skills(source: &ContentSource) -> Result<Vec<SkillCategory>, ContentError> {
    load_resource(source, SKILLS_RESOURCE).await
}

/// Load the timeline list, in source order.
pub async fn load_timeline(source: &ContentSource) -> Result<Vec<TimelineEntry>, ContentError> {
    load_resource(source, TIMELINE_RESOURCE).await
}

async fn load_resource<T: DeserializeOwned>(
    source: &ContentSource,
    resource: &str,
) -> Result<T, ContentError> {
    let body = match source {
        ContentSource::Remote(_) => fetch_remote(source, resource).await?,
        ContentSource::Local(_) => read_local(source, resource).await?,
    };

    serde_json::from_str(&body).map_err(|source| ContentError::Parse {
        resource: resource.to_string(),
        source,
    })
}

async fn fetch_remote(source: &ContentSource, resource: &str) -> Result<String, ContentError> {
    let url = source.locate(resource);
    tracing::debug!("fetching {url}");

    let fetch_err = |source| ContentError::Fetch {
        resource: resource.to_string(),
        source,
    };

    let response = reqwest::get(&url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fetch_err)?;

    response.text().await.map_err(fetch_err)
}

async fn read_local(source: &ContentSource, resource: &str) -> Result<String, ContentError> {
    let path = source.locate(resource);
    tracing::debug!("reading {path}");

    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ContentError::Read {
            resource: resource.to_string(),
            source,
        })
}
