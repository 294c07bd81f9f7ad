//! Wire and state types for search results

use serde::{Deserialize, Deserializer, Serialize};

/// A single search hit as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultItem {
    /// Page title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Target URL
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// Shortened link text shown above the title
    #[serde(deserialize_with = "null_as_default")]
    pub displayed_link: String,
    /// Content snippet/description
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            title: title.into(),
            displayed_link: link.clone(),
            link,
            snippet: String::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn with_displayed_link(mut self, displayed_link: impl Into<String>) -> Self {
        self.displayed_link = displayed_link.into();
        self
    }

    /// Host part of the link, if it parses
    pub fn hostname(&self) -> Option<String> {
        url::Url::parse(&self.link)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
    }
}

/// Treat an explicit `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /api/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }
}

/// Response of `POST /api/search`; absent or null fields default to empty/0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<ResultItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub search_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u64,
    /// Echo of the query, when the backend sends it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Response of `GET /api/suggestions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

/// The results currently held by the client.
///
/// Always replaced as a whole when a search completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
    pub total_results: u64,
    pub search_time: f64,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// "About N results (T seconds)" with T to two decimal places
    pub fn stats_line(&self) -> String {
        format!(
            "About {} results ({:.2} seconds)",
            self.total_results,
            self.search_time.max(0.0)
        )
    }
}

impl From<SearchResponse> for ResultSet {
    fn from(response: SearchResponse) -> Self {
        Self {
            items: response.results,
            total_results: response.total_results,
            search_time: if response.search_time.is_finite() {
                response.search_time.max(0.0)
            } else {
                0.0
            },
        }
    }
}
