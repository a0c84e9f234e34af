//! Project gallery state: load phase, filtering, progressive disclosure, and
//! the detail dialog state machine.

use std::time::Instant;

use folio_model::{CategoryFilter, Project, distinct_filters};

use crate::constants::VISIBLE_COLLAPSED;

// =============================================================================
// LOAD PHASE
// =============================================================================

/// How the project list was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetch in flight.
    Loading,
    /// Loaded from the configured source.
    Ready,
    /// The fetch failed or returned nothing; built-in sample projects are
    /// shown instead so the grid never renders empty.
    SampleFallback {
        /// User-facing reason for the fallback.
        reason: String,
    },
}

// =============================================================================
// DETAIL DIALOG STATE MACHINE
// =============================================================================

/// Detail dialog lifecycle.
///
/// The dialog mounts inactive (`Opening`), becomes interactive after a short
/// activation delay (`Open`), and plays an exit transition (`Closing`) before
/// it is detached. Transitions are only valid in this order; a second card
/// press while a dialog is up is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    /// No dialog.
    Closed,
    /// Mounted but not yet interactive.
    Opening {
        /// Id of the project being shown.
        project_id: String,
        /// Index of the card (in the filtered list) that opened the dialog.
        trigger: usize,
    },
    /// Fully interactive, with keyboard focus trapped inside.
    Open {
        project_id: String,
        trigger: usize,
        /// Index of the focused element: 0 is the close button, links follow.
        focus: usize,
    },
    /// Exit transition in progress.
    Closing {
        project_id: String,
        trigger: usize,
        /// When the exit transition started, for the fade-out.
        started: Instant,
    },
}

impl ModalState {
    /// Whether no dialog is mounted.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether the dialog accepts input.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Id of the project being shown, in any mounted phase.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Opening { project_id, .. }
            | Self::Open { project_id, .. }
            | Self::Closing { project_id, .. } => Some(project_id),
        }
    }

    /// Begin opening a dialog. Only valid when closed.
    pub fn request_open(&mut self, project_id: String, trigger: usize) -> bool {
        if !self.is_closed() {
            return false;
        }
        *self = Self::Opening {
            project_id,
            trigger,
        };
        true
    }

    /// Activation delay elapsed; the dialog becomes interactive with focus on
    /// the close button. A stale activation after a close is ignored.
    pub fn activate(&mut self) -> bool {
        if let Self::Opening {
            project_id,
            trigger,
        } = self
        {
            *self = Self::Open {
                project_id: std::mem::take(project_id),
                trigger: *trigger,
                focus: 0,
            };
            true
        } else {
            false
        }
    }

    /// Begin the exit transition. Valid from `Opening` or `Open`.
    pub fn request_close(&mut self, now: Instant) -> bool {
        match self {
            Self::Opening {
                project_id,
                trigger,
            }
            | Self::Open {
                project_id,
                trigger,
                ..
            } => {
                *self = Self::Closing {
                    project_id: std::mem::take(project_id),
                    trigger: *trigger,
                    started: now,
                };
                true
            }
            Self::Closed | Self::Closing { .. } => false,
        }
    }

    /// Exit transition finished. Returns the trigger card index so focus can
    /// be returned to it.
    pub fn detach(&mut self) -> Option<usize> {
        if let Self::Closing { trigger, .. } = self {
            let trigger = *trigger;
            *self = Self::Closed;
            Some(trigger)
        } else {
            None
        }
    }

    /// Currently focused element, when open.
    pub fn focus(&self) -> Option<usize> {
        match self {
            Self::Open { focus, .. } => Some(*focus),
            _ => None,
        }
    }

    /// Move focus forward, wrapping past the last element.
    pub fn focus_next(&mut self, count: usize) {
        if let Self::Open { focus, .. } = self
            && count > 0
        {
            *focus = (*focus + 1) % count;
        }
    }

    /// Move focus backward, wrapping past the first element.
    pub fn focus_previous(&mut self, count: usize) {
        if let Self::Open { focus, .. } = self
            && count > 0
        {
            *focus = (*focus + count - 1) % count;
        }
    }
}

// =============================================================================
// GALLERY STATE
// =============================================================================

/// Project gallery state.
#[derive(Debug, Clone)]
pub struct GalleryState {
    /// How the project list was obtained.
    pub phase: LoadPhase,
    /// All loaded projects, in source order.
    pub projects: Vec<Project>,
    /// Filter chips derived from the loaded projects.
    pub filters: Vec<CategoryFilter>,
    /// Currently active filter.
    pub active_filter: CategoryFilter,
    /// Whether the grid shows every match or only the first few.
    pub expanded: bool,
    /// Detail dialog state.
    pub modal: ModalState,
    /// Card (index in the filtered list) to highlight after the dialog
    /// closes, standing in for returned keyboard focus.
    pub return_focus: Option<usize>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            projects: Vec::new(),
            filters: Vec::new(),
            active_filter: CategoryFilter::all(),
            expanded: false,
            modal: ModalState::Closed,
            return_focus: None,
        }
    }
}

impl GalleryState {
    /// Install a loaded project list and derive the filter chips from it.
    pub fn set_projects(&mut self, projects: Vec<Project>, phase: LoadPhase) {
        self.filters = distinct_filters(&projects);
        self.projects = projects;
        self.phase = phase;
        self.active_filter = CategoryFilter::all();
        self.expanded = false;
        self.return_focus = None;
    }

    /// Projects matching the active filter, in source order.
    pub fn filtered(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.active_filter.matches(p))
            .collect()
    }

    /// The slice of filtered projects currently visible in the grid.
    pub fn visible(&self) -> Vec<&Project> {
        let filtered = self.filtered();
        if self.expanded {
            filtered
        } else {
            filtered.into_iter().take(VISIBLE_COLLAPSED).collect()
        }
    }

    /// How many matches are hidden behind "Show more".
    pub fn hidden_count(&self) -> usize {
        if self.expanded {
            0
        } else {
            self.filtered().len().saturating_sub(VISIBLE_COLLAPSED)
        }
    }

    /// Activate a filter chip. Re-selecting the active filter is a no-op and
    /// returns false.
    pub fn select_filter(&mut self, filter: CategoryFilter) -> bool {
        if filter == self.active_filter {
            return false;
        }
        self.active_filter = filter;
        self.expanded = false;
        self.return_focus = None;
        true
    }

    /// Look up a project by id.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project shown in the dialog, if one is mounted.
    pub fn modal_project(&self) -> Option<&Project> {
        self.modal.project_id().and_then(|id| self.project_by_id(id))
    }

    /// Number of focusable elements in the dialog for a project: the close
    /// button plus each present link.
    pub fn focusable_count(project: &Project) -> usize {
        1 + usize::from(project.links.demo.is_some()) + usize::from(project.links.code.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, categories: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            categories: categories.iter().map(ToString::to_string).collect(),
            ..Project::default()
        }
    }

    fn gallery_with(projects: Vec<Project>) -> GalleryState {
        let mut gallery = GalleryState::default();
        gallery.set_projects(projects, LoadPhase::Ready);
        gallery
    }

    #[test]
    fn filters_derive_from_loaded_projects() {
        let gallery = gallery_with(vec![
            project("a", &["web"]),
            project("b", &["mobile", "web"]),
        ]);
        let labels: Vec<_> = gallery.filters.iter().map(CategoryFilter::as_str).collect();
        assert_eq!(labels, ["all", "web", "mobile"]);
    }

    #[test]
    fn selecting_the_active_filter_is_a_noop() {
        let mut gallery = gallery_with(vec![project("a", &["web"])]);
        assert!(!gallery.select_filter(CategoryFilter::all()));
        assert!(gallery.select_filter(CategoryFilter::category("web")));
        assert!(!gallery.select_filter(CategoryFilter::category("web")));
    }

    #[test]
    fn filter_change_collapses_the_grid() {
        let mut gallery = gallery_with(vec![
            project("a", &["web"]),
            project("b", &["web"]),
            project("c", &["web"]),
            project("d", &["web"]),
        ]);
        gallery.expanded = true;
        gallery.select_filter(CategoryFilter::category("web"));
        assert!(!gallery.expanded);
        assert_eq!(gallery.visible().len(), 3);
        assert_eq!(gallery.hidden_count(), 1);
    }

    #[test]
    fn modal_walks_the_full_lifecycle() {
        let mut modal = ModalState::Closed;
        let now = Instant::now();

        assert!(modal.request_open("a".to_string(), 2));
        assert!(!modal.request_open("b".to_string(), 0), "single instance");

        assert!(modal.activate());
        assert_eq!(modal.focus(), Some(0));

        assert!(modal.request_close(now));
        assert!(!modal.request_close(now), "already closing");

        assert_eq!(modal.detach(), Some(2));
        assert!(modal.is_closed());
    }

    #[test]
    fn stale_timer_messages_are_ignored() {
        let mut modal = ModalState::Closed;
        let now = Instant::now();

        // Activation arriving after a close does nothing.
        assert!(!modal.activate());
        assert_eq!(modal.detach(), None);

        // Closing straight from Opening is allowed (close during the
        // activation window).
        assert!(modal.request_open("a".to_string(), 0));
        assert!(modal.request_close(now));
        assert!(!modal.activate(), "activation timer fired mid-close");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut modal = ModalState::Closed;
        modal.request_open("a".to_string(), 0);
        modal.activate();

        modal.focus_next(3);
        modal.focus_next(3);
        assert_eq!(modal.focus(), Some(2));
        modal.focus_next(3);
        assert_eq!(modal.focus(), Some(0));
        modal.focus_previous(3);
        assert_eq!(modal.focus(), Some(2));
    }

    #[test]
    fn focusable_count_reflects_present_links() {
        let mut p = project("a", &[]);
        assert_eq!(GalleryState::focusable_count(&p), 1);
        p.links.demo = Some("https://example.com".to_string());
        p.links.code = Some("https://example.com/src".to_string());
        assert_eq!(GalleryState::focusable_count(&p), 3);
    }
}
