//! Backend trait

use crate::error::Result;
use crate::results::{SearchRequest, SearchResponse, SuggestionsResponse};
use async_trait::async_trait;

/// A service that answers search and suggestion lookups
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Backend name, used in logs
    fn name(&self) -> &str;

    /// Run a full-text search
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Fetch autocomplete suggestions for the raw input text
    async fn suggest(&self, text: &str) -> Result<SuggestionsResponse>;
}
