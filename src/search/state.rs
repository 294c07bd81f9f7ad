//! UI state held by the search client

use crate::results::ResultSet;
use serde::Serialize;

/// Everything the view is derived from
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchUiState {
    /// Current text in the search box
    pub query: String,
    pub results: ResultSet,
    pub suggestions: Vec<String>,
    /// A search request is outstanding
    pub loading: bool,
    /// At least one search was initiated since the box was last cleared
    pub has_searched: bool,
    pub show_suggestions: bool,
    /// Id of the last category picked
    pub selected_category: Option<String>,
    pub input_focused: bool,
}

impl SearchUiState {
    /// Dropdown is drawn only when opened and there is something to show
    pub fn dropdown_visible(&self) -> bool {
        self.show_suggestions && !self.suggestions.is_empty()
    }

    /// A search completed with nothing to show
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.has_searched && self.results.is_empty()
    }
}
