//! Content load result handlers.

use iced::Task;

use folio_content::sample_projects;
use folio_model::{Project, SkillCategory, TimelineEntry};

use crate::message::Message;
use crate::state::{AppState, LoadPhase};

/// Install a loaded project list, substituting the built-in samples when the
/// load failed or came back empty so the grid never renders empty.
pub fn handle_projects_loaded(
    state: &mut AppState,
    result: Result<Vec<Project>, String>,
) -> Task<Message> {
    match result {
        Ok(projects) if !projects.is_empty() => {
            tracing::info!(count = projects.len(), "Projects loaded");
            state.gallery.set_projects(projects, LoadPhase::Ready);
        }
        Ok(_) => {
            tracing::warn!("Project source returned no projects, using samples");
            state.gallery.set_projects(
                sample_projects(),
                LoadPhase::SampleFallback {
                    reason: "The source returned no projects.".to_string(),
                },
            );
        }
        Err(reason) => {
            tracing::warn!(%reason, "Project load failed, using samples");
            state
                .gallery
                .set_projects(sample_projects(), LoadPhase::SampleFallback { reason });
        }
    }
    Task::none()
}

/// Install a skills load result. Failures show inline; there is no fallback.
pub fn handle_skills_loaded(
    state: &mut AppState,
    result: Result<Vec<SkillCategory>, String>,
) -> Task<Message> {
    if let Err(reason) = &result {
        tracing::warn!(%reason, "Skills load failed");
    }
    state.skills.set_result(result);
    Task::none()
}

/// Install a timeline load result. Failures show inline; there is no fallback.
pub fn handle_timeline_loaded(
    state: &mut AppState,
    result: Result<Vec<TimelineEntry>, String>,
) -> Task<Message> {
    if let Err(reason) = &result {
        tracing::warn!(%reason, "Timeline load failed");
    }
    state.timeline.set_result(result);
    Task::none()
}
