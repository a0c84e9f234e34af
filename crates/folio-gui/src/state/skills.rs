//! Skills section state.

use folio_model::SkillCategory;

/// Skills section state.
#[derive(Debug, Clone, Default)]
pub struct SkillsState {
    /// Loaded skill categories, in source order.
    pub categories: Vec<SkillCategory>,
    /// Load error, shown inline instead of the grid.
    pub error: Option<String>,
    /// Whether the initial load has finished (either way).
    pub loaded: bool,
}

impl SkillsState {
    /// Install a load result.
    pub fn set_result(&mut self, result: Result<Vec<SkillCategory>, String>) {
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.error = None;
            }
            Err(reason) => self.error = Some(reason),
        }
        self.loaded = true;
    }
}
