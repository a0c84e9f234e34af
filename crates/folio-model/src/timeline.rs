//! Career timeline entries.

use serde::{Deserialize, Serialize};

/// One marker on the career timeline.
///
/// Entries are rendered in array order, which is assumed chronological;
/// the application never sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    /// Display year (kept as a string; sources use values like "2021-2023").
    pub year: String,
    /// What happened.
    pub event: String,
}
