//! Project gallery messages.

use folio_model::CategoryFilter;

/// Events from the project gallery and its detail dialog.
#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// A filter chip was pressed.
    FilterSelected(CategoryFilter),
    /// "Show more" / "Show less" was pressed.
    ToggleExpanded,
    /// A project card was pressed. The index is into the visible grid.
    CardPressed(usize),
    /// The activation delay elapsed; the dialog becomes interactive.
    ModalActivated,
    /// The dialog close button, backdrop, or Escape requested a close.
    CloseRequested,
    /// The exit transition finished; the dialog is removed.
    ModalDetached,
    /// Move dialog focus to the next focusable element.
    FocusNext,
    /// Move dialog focus to the previous focusable element.
    FocusPrevious,
    /// Reload projects after a failed fetch.
    Retry,
}
