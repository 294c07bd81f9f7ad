//! View derivation and rendering
//!
//! A [`View`] is computed from the client state on every change; nothing in
//! it is stored. Rendering goes through embedded Tera templates.

mod templates;

pub use templates::Templates;

use crate::categories::{CATEGORIES, EXAMPLE_QUERIES};
use crate::config::UiSettings;
use crate::results::ResultItem;
use crate::search::SearchUiState;
use serde::Serialize;

/// Line above the results list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// No search yet
    Hidden,
    Searching,
    Stats { line: String },
}

/// Main content area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    Blank,
    /// Placeholder rows while a search is outstanding
    Loading { rows: usize },
    Results { items: Vec<ResultItem> },
    NoResults { chips: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// Everything needed to draw the page once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub query: String,
    /// Landing presentation before the first search
    pub hero: bool,
    pub input_focused: bool,
    /// Suggestions to draw under the input; empty when the dropdown is closed
    pub dropdown: Vec<String>,
    pub categories: Vec<CategoryEntry>,
    pub status: Status,
    pub body: Body,
}

impl View {
    pub fn from_state(state: &SearchUiState, ui: &UiSettings) -> Self {
        let status = match (state.has_searched, state.loading) {
            (false, _) => Status::Hidden,
            (true, true) => Status::Searching,
            (true, false) => Status::Stats {
                line: state.results.stats_line(),
            },
        };

        let body = if state.loading {
            Body::Loading {
                rows: ui.skeleton_rows,
            }
        } else if !state.results.is_empty() {
            Body::Results {
                items: state.results.items.clone(),
            }
        } else if state.has_searched {
            Body::NoResults {
                chips: EXAMPLE_QUERIES.to_vec(),
            }
        } else {
            Body::Blank
        };

        let dropdown = if state.dropdown_visible() {
            state.suggestions.clone()
        } else {
            Vec::new()
        };

        let categories = CATEGORIES
            .iter()
            .map(|c| CategoryEntry {
                id: c.id,
                name: c.name,
                icon: c.icon,
                selected: state.selected_category.as_deref() == Some(c.id),
            })
            .collect();

        Self {
            query: state.query.clone(),
            hero: !state.has_searched,
            input_focused: state.input_focused,
            dropdown,
            categories,
            status,
            body,
        }
    }

    /// Number of result entries drawn
    pub fn result_count(&self) -> usize {
        match &self.body {
            Body::Results { items } => items.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultSet;

    fn searched(items: Vec<ResultItem>, total: u64, time: f64) -> SearchUiState {
        SearchUiState {
            query: "chatbot".to_string(),
            results: ResultSet {
                items,
                total_results: total,
                search_time: time,
            },
            has_searched: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_view_is_hero() {
        let view = View::from_state(&SearchUiState::default(), &UiSettings::default());
        assert!(view.hero);
        assert_eq!(view.status, Status::Hidden);
        assert_eq!(view.body, Body::Blank);
        assert!(view.dropdown.is_empty());
        assert_eq!(view.categories.len(), 11);
    }

    #[test]
    fn test_loading_replaces_stats() {
        let mut state = searched(vec![ResultItem::new("A", "https://a.ai")], 1, 0.1);
        state.loading = true;

        let view = View::from_state(&state, &UiSettings::default());
        assert!(!view.hero);
        assert_eq!(view.status, Status::Searching);
        assert_eq!(view.body, Body::Loading { rows: 5 });
        assert_eq!(view.result_count(), 0);
    }

    #[test]
    fn test_results_and_stats() {
        let state = searched(
            vec![
                ResultItem::new("A", "https://a.ai"),
                ResultItem::new("B", "https://b.ai"),
            ],
            2,
            0.42,
        );

        let view = View::from_state(&state, &UiSettings::default());
        assert_eq!(view.result_count(), 2);
        assert_eq!(
            view.status,
            Status::Stats {
                line: "About 2 results (0.42 seconds)".to_string()
            }
        );
    }

    #[test]
    fn test_empty_search_offers_chips() {
        let view = View::from_state(&searched(vec![], 0, 0.0), &UiSettings::default());
        assert_eq!(
            view.body,
            Body::NoResults {
                chips: vec![
                    "ChatGPT",
                    "Midjourney",
                    "Stable Diffusion",
                    "OpenAI",
                    "Machine Learning"
                ]
            }
        );
    }

    #[test]
    fn test_dropdown_and_selected_category() {
        let state = SearchUiState {
            suggestions: vec!["OpenAI ChatGPT".to_string()],
            show_suggestions: true,
            selected_category: Some("music".to_string()),
            ..Default::default()
        };

        let view = View::from_state(&state, &UiSettings::default());
        assert_eq!(view.dropdown, vec!["OpenAI ChatGPT".to_string()]);
        let selected: Vec<_> = view.categories.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "music");
    }
}
