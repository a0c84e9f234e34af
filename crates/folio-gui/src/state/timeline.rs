//! Timeline section state.

use folio_model::TimelineEntry;

/// Timeline section state.
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    /// Entries in source order; the order is meaningful and never re-sorted.
    pub entries: Vec<TimelineEntry>,
    /// Load error, shown inline instead of the timeline.
    pub error: Option<String>,
    /// Whether the initial load has finished (either way).
    pub loaded: bool,
}

impl TimelineState {
    /// Install a load result.
    pub fn set_result(&mut self, result: Result<Vec<TimelineEntry>, String>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(reason) => self.error = Some(reason),
        }
        self.loaded = true;
    }
}
