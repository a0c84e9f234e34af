//! Content loading service.
//!
//! Wraps the `folio-content` loaders in `Task::perform` so results arrive as
//! messages. Errors are flattened to user-facing strings; the handlers decide
//! between inline errors and the sample fallback.

use iced::Task;

use folio_content::ContentSource;

use crate::message::Message;

/// Load every content resource concurrently.
pub fn load_all(source: &ContentSource) -> Task<Message> {
    Task::batch([
        load_projects(source.clone()),
        load_skills(source.clone()),
        load_timeline(source.clone()),
    ])
}

/// Load the project list.
pub fn load_projects(source: ContentSource) -> Task<Message> {
    Task::perform(
        async move {
            folio_content::load_projects(&source)
                .await
                .map_err(|e| e.to_string())
        },
        Message::ProjectsLoaded,
    )
}

/// Load the skill categories.
pub fn load_skills(source: ContentSource) -> Task<Message> {
    Task::perform(
        async move {
            folio_content::load_skills(&source)
                .await
                .map_err(|e| e.to_string())
        },
        Message::SkillsLoaded,
    )
}

/// Load the timeline entries.
pub fn load_timeline(source: ContentSource) -> Task<Message> {
    Task::perform(
        async move {
            folio_content::load_timeline(&source)
                .await
                .map_err(|e| e.to_string())
        },
        Message::TimelineLoaded,
    )
}
