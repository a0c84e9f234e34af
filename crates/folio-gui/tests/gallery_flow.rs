//! Gallery behavior through the update path: fallback content, filtering,
//! and the detail dialog lifecycle.

use folio_gui::app::App;
use folio_gui::message::{GalleryMessage, Message};
use folio_gui::state::{AppState, LoadPhase, ModalState, Settings};
use folio_model::{CategoryFilter, Project, ProjectLinks};

fn app_with_projects(projects: Vec<Project>) -> App {
    let mut app = App {
        state: AppState::with_settings(Settings::default()),
    };
    let _ = app.update(Message::ProjectsLoaded(Ok(projects)));
    app
}

fn project(id: &str, category: &str) -> Project {
    Project {
        id: id.to_string(),
        title: id.to_string(),
        categories: vec![category.to_string()],
        links: ProjectLinks {
            demo: Some(format!("https://example.com/{id}")),
            code: None,
        },
        ..Project::default()
    }
}

#[test]
fn failed_load_falls_back_to_samples() {
    let mut app = App {
        state: AppState::with_settings(Settings::default()),
    };
    let _ = app.update(Message::ProjectsLoaded(Err("connection refused".into())));

    assert!(matches!(
        app.state.gallery.phase,
        LoadPhase::SampleFallback { .. }
    ));
    assert_eq!(app.state.gallery.projects.len(), 2, "built-in samples");
}

#[test]
fn empty_load_also_falls_back() {
    let app = app_with_projects(Vec::new());
    assert!(matches!(
        app.state.gallery.phase,
        LoadPhase::SampleFallback { .. }
    ));
}

#[test]
fn filtering_narrows_the_grid_and_reselect_is_a_noop() {
    let mut app = app_with_projects(vec![
        project("a", "web"),
        project("b", "mobile"),
        project("c", "web"),
    ]);

    let _ = app.update(Message::Gallery(GalleryMessage::FilterSelected(
        CategoryFilter::category("web"),
    )));
    assert_eq!(app.state.gallery.filtered().len(), 2);

    // Selecting the already-active chip changes nothing.
    let expanded_before = app.state.gallery.expanded;
    let _ = app.update(Message::Gallery(GalleryMessage::FilterSelected(
        CategoryFilter::category("web"),
    )));
    assert_eq!(app.state.gallery.filtered().len(), 2);
    assert_eq!(app.state.gallery.expanded, expanded_before);
}

#[test]
fn show_more_expands_past_the_first_three() {
    let mut app = app_with_projects(vec![
        project("a", "web"),
        project("b", "web"),
        project("c", "web"),
        project("d", "web"),
        project("e", "web"),
    ]);

    assert_eq!(app.state.gallery.visible().len(), 3);
    assert_eq!(app.state.gallery.hidden_count(), 2);

    let _ = app.update(Message::Gallery(GalleryMessage::ToggleExpanded));
    assert_eq!(app.state.gallery.visible().len(), 5);
    assert_eq!(app.state.gallery.hidden_count(), 0);
}

#[test]
fn dialog_lifecycle_via_messages() {
    let mut app = app_with_projects(vec![project("a", "web"), project("b", "web")]);

    let _ = app.update(Message::Gallery(GalleryMessage::CardPressed(1)));
    assert!(matches!(
        app.state.gallery.modal,
        ModalState::Opening { .. }
    ));

    // A second press while a dialog is up is ignored.
    let _ = app.update(Message::Gallery(GalleryMessage::CardPressed(0)));
    assert_eq!(app.state.gallery.modal.project_id(), Some("b"));

    let _ = app.update(Message::Gallery(GalleryMessage::ModalActivated));
    assert!(app.state.gallery.modal.is_open());
    assert_eq!(app.state.gallery.modal.focus(), Some(0));

    let _ = app.update(Message::Gallery(GalleryMessage::CloseRequested));
    assert!(matches!(
        app.state.gallery.modal,
        ModalState::Closing { .. }
    ));

    let _ = app.update(Message::Gallery(GalleryMessage::ModalDetached));
    assert!(app.state.gallery.modal.is_closed());
    // Focus returns to the card that opened the dialog.
    assert_eq!(app.state.gallery.return_focus, Some(1));
}

#[test]
fn stale_dialog_timers_do_not_resurrect_state() {
    let mut app = app_with_projects(vec![project("a", "web")]);

    let _ = app.update(Message::Gallery(GalleryMessage::CardPressed(0)));
    // Close during the activation window.
    let _ = app.update(Message::Gallery(GalleryMessage::CloseRequested));
    // The activation timer fires afterwards; it must not reopen the dialog.
    let _ = app.update(Message::Gallery(GalleryMessage::ModalActivated));
    assert!(matches!(
        app.state.gallery.modal,
        ModalState::Closing { .. }
    ));

    let _ = app.update(Message::Gallery(GalleryMessage::ModalDetached));
    assert!(app.state.gallery.modal.is_closed());

    // A leftover detach when nothing is closing is a no-op.
    let _ = app.update(Message::Gallery(GalleryMessage::ModalDetached));
    assert!(app.state.gallery.modal.is_closed());
}

#[test]
fn focus_cycles_through_close_button_and_links() {
    // One demo link only: focusables are close (0) and demo (1).
    let mut app = app_with_projects(vec![project("a", "web")]);
    let _ = app.update(Message::Gallery(GalleryMessage::CardPressed(0)));
    let _ = app.update(Message::Gallery(GalleryMessage::ModalActivated));

    let _ = app.update(Message::Gallery(GalleryMessage::FocusNext));
    assert_eq!(app.state.gallery.modal.focus(), Some(1));
    let _ = app.update(Message::Gallery(GalleryMessage::FocusNext));
    assert_eq!(app.state.gallery.modal.focus(), Some(0), "wraps around");
    let _ = app.update(Message::Gallery(GalleryMessage::FocusPrevious));
    assert_eq!(app.state.gallery.modal.focus(), Some(1));
}

#[test]
fn retry_returns_to_loading() {
    let mut app = App {
        state: AppState::with_settings(Settings::default()),
    };
    let _ = app.update(Message::ProjectsLoaded(Err("offline".into())));
    let _ = app.update(Message::Gallery(GalleryMessage::Retry));
    assert_eq!(app.state.gallery.phase, LoadPhase::Loading);
}
