//! HTTP implementation of the search backend

use super::traits::SearchBackend;
use super::{SEARCH_PATH, SUGGESTIONS_PATH};
use crate::error::Result;
use crate::network::HttpClient;
use crate::results::{SearchRequest, SearchResponse, SuggestionsResponse};
use async_trait::async_trait;

/// Backend reached over HTTP at a configured base URL
#[derive(Clone)]
pub struct HttpBackend {
    client: HttpClient,
}

impl HttpBackend {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// URL of the suggestion lookup for `text`, with the raw text percent-encoded
    pub fn suggestions_url(&self, text: &str) -> String {
        format!(
            "{}?q={}",
            self.client.endpoint(SUGGESTIONS_PATH),
            urlencoding::encode(text)
        )
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    fn name(&self) -> &str {
        self.client.base_url()
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.client.post_json(SEARCH_PATH, request).await
    }

    async fn suggest(&self, text: &str) -> Result<SuggestionsResponse> {
        self.client.get_json(&self.suggestions_url(text)).await
    }
}
