//! Scripted backend for client tests

use crate::backend::SearchBackend;
use crate::error::{ClientError, Result};
use crate::results::{SearchRequest, SearchResponse, SuggestionsResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every call and answers from a script keyed by query text
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<HashMap<String, (SearchResponse, Duration)>>,
    fail_status: Mutex<Option<u16>>,
    panic_query: Mutex<Option<String>>,
    searches: Mutex<Vec<String>>,
    lookups: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, query: &str, response: SearchResponse) {
        self.respond_after(query, response, Duration::ZERO);
    }

    pub fn respond_after(&self, query: &str, response: SearchResponse, delay: Duration) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), (response, delay));
    }

    /// Answer every later call with this HTTP status
    pub fn fail_with(&self, status: u16) {
        *self.fail_status.lock().unwrap() = Some(status);
    }

    /// Panic inside `search` for this query
    pub fn panic_on(&self, query: &str) {
        *self.panic_query.lock().unwrap() = Some(query.to_string());
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn suggest_calls(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn failure(&self, path: &str) -> Option<ClientError> {
        self.fail_status
            .lock()
            .unwrap()
            .map(|status| ClientError::Status {
                status,
                url: format!("http://scripted{}", path),
            })
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.searches.lock().unwrap().push(request.query.clone());
        if self.panic_query.lock().unwrap().as_deref() == Some(request.query.as_str()) {
            panic!("scripted panic for '{}'", request.query);
        }
        if let Some(err) = self.failure("/api/search") {
            return Err(err);
        }

        let scripted = self.responses.lock().unwrap().get(&request.query).cloned();
        let (response, delay) = scripted.unwrap_or_default();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(response)
    }

    async fn suggest(&self, text: &str) -> Result<SuggestionsResponse> {
        self.lookups.lock().unwrap().push(text.to_string());
        if let Some(err) = self.failure("/api/suggestions") {
            return Err(err);
        }

        Ok(SuggestionsResponse {
            suggestions: vec![format!("{} suggestion", text)],
        })
    }
}
