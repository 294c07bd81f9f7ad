//! The search client: input handling, debounced dispatch and state updates

use super::debounce::Debouncer;
use super::pointer::{ClickTarget, PointerBus};
use super::state::SearchUiState;
use crate::backend::SearchBackend;
use crate::categories::Category;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::results::{ResultSet, SearchRequest, SearchResponse, SuggestionsResponse};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Completion reported back to the client by a background task
#[derive(Debug)]
enum ClientEvent {
    DebounceElapsed {
        generation: u64,
        query: String,
    },
    SearchFinished {
        seq: u64,
        query: String,
        outcome: Result<SearchResponse>,
    },
    SuggestionsFinished {
        seq: u64,
        outcome: Result<SuggestionsResponse>,
    },
}

/// What a call to [`SearchClient::next_event`] changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The quiet period ended and the typed query was submitted
    DebouncedSearch { query: String },
    SearchResults { query: String, count: usize },
    /// The search failed; results were cleared
    SearchFailed { query: String },
    Suggestions { count: usize },
    /// The suggestion lookup failed; the list was cleared
    SuggestionsFailed,
    Click(ClickTarget),
    /// Superseded timer or response, nothing changed
    Stale,
}

impl Update {
    pub fn changed_state(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Request numbering for one kind of request
#[derive(Debug, Default)]
struct RequestSeq {
    latest: u64,
    in_flight: usize,
}

impl RequestSeq {
    fn dispatch(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight += 1;
        self.latest
    }

    fn finish(&mut self, seq: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        seq == self.latest
    }

    /// Make every outstanding request stale
    fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Run a backend call on its own task so a panic still yields an outcome
async fn isolated<T, F>(call: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(call).await.unwrap_or_else(|e| Err(e.into()))
}

enum Incoming {
    Client(Option<ClientEvent>),
    Click(std::result::Result<ClickTarget, RecvError>),
}

/// Search box controller.
///
/// All state changes happen on the task that owns the client. Requests and
/// the debounce timer run as spawned tasks whose completions are queued and
/// applied one at a time by [`next_event`](Self::next_event).
pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
    settings: ClientSettings,
    state: SearchUiState,
    debouncer: Debouncer,
    events_tx: mpsc::UnboundedSender<ClientEvent>,
    events_rx: mpsc::UnboundedReceiver<ClientEvent>,
    pointer: Option<broadcast::Receiver<ClickTarget>>,
    searches: RequestSeq,
    lookups: RequestSeq,
}

impl SearchClient {
    pub fn new(backend: Arc<dyn SearchBackend>, settings: ClientSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            debouncer: Debouncer::new(settings.debounce()),
            settings,
            state: SearchUiState::default(),
            events_tx,
            events_rx,
            pointer: None,
            searches: RequestSeq::default(),
            lookups: RequestSeq::default(),
        }
    }

    pub fn state(&self) -> &SearchUiState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Search the given text right away.
    ///
    /// Blank text clears the results and resets the page to its initial
    /// state without contacting the backend.
    pub fn submit_query(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.state.results = ResultSet::default();
            self.state.has_searched = false;
            if self.settings.discard_stale_responses {
                self.searches.invalidate();
                self.state.loading = false;
            }
            return;
        }

        self.state.loading = true;
        self.state.has_searched = true;

        let seq = self.searches.dispatch();
        let request = SearchRequest::new(text, self.settings.page);
        let backend = self.backend.clone();
        let tx = self.events_tx.clone();

        info!("Searching '{}' (#{}) via {}", text, seq, backend.name());
        let query = request.query.clone();
        tokio::spawn(async move {
            let outcome = isolated(async move { backend.search(&request).await }).await;
            // Fails only once the client is gone
            let _ = tx.send(ClientEvent::SearchFinished {
                seq,
                query,
                outcome,
            });
        });
    }

    /// Look up autocomplete suggestions for the raw text
    pub fn fetch_suggestions(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.state.suggestions.clear();
            if self.settings.discard_stale_responses {
                self.lookups.invalidate();
            }
            return;
        }

        let seq = self.lookups.dispatch();
        let text = text.to_string();
        let backend = self.backend.clone();
        let tx = self.events_tx.clone();

        debug!("Fetching suggestions for '{}' (#{})", text, seq);
        tokio::spawn(async move {
            let outcome = isolated(async move { backend.suggest(&text).await }).await;
            let _ = tx.send(ClientEvent::SuggestionsFinished { seq, outcome });
        });
    }

    /// A keystroke changed the input text
    pub fn on_input_change(&mut self, text: &str) {
        self.state.query = text.to_string();

        let tx = self.events_tx.clone();
        let query = text.to_string();
        self.debouncer.schedule(move |generation| {
            let _ = tx.send(ClientEvent::DebounceElapsed { generation, query });
        });

        self.fetch_suggestions(text);
        self.state.show_suggestions = true;
    }

    /// Explicit form submission
    pub fn on_submit(&mut self) {
        self.state.show_suggestions = false;
        self.debouncer.cancel();
        let query = self.state.query.clone();
        self.submit_query(&query);
    }

    /// A suggestion or example chip was picked
    pub fn on_suggestion_select(&mut self, text: &str) {
        self.state.query = text.to_string();
        self.state.show_suggestions = false;
        self.debouncer.cancel();
        self.submit_query(text);
        self.state.input_focused = true;
    }

    /// A category shortcut was picked; the box shows its name, the search uses its query
    pub fn on_category_select(&mut self, category: &Category) {
        self.state.selected_category = Some(category.id.to_string());
        self.state.query = category.name.to_string();
        self.state.show_suggestions = false;
        self.debouncer.cancel();
        self.submit_query(category.query);
    }

    /// A pointer press anywhere on the page
    pub fn on_outside_click(&mut self, target: ClickTarget) {
        if !target.within_search_box() {
            self.state.show_suggestions = false;
            self.state.input_focused = false;
        }
    }

    /// The input box regained focus
    pub fn on_input_focus(&mut self) {
        self.state.input_focused = true;
        if !self.state.query.is_empty() {
            self.state.show_suggestions = true;
        }
    }

    /// Start listening for page-wide pointer events
    pub fn mount(&mut self, bus: &PointerBus) {
        self.pointer = Some(bus.subscribe());
    }

    /// Stop listening for pointer events
    pub fn unmount(&mut self) {
        self.pointer = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.pointer.is_some()
    }

    /// No timer pending and no request outstanding
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.searches.in_flight == 0 && self.lookups.in_flight == 0
    }

    /// Wait for the next background completion or pointer event and apply it.
    ///
    /// Returns `None` only if every event source is closed.
    pub async fn next_event(&mut self) -> Option<Update> {
        let incoming = match self.pointer.as_mut() {
            Some(pointer) => tokio::select! {
                event = self.events_rx.recv() => Incoming::Client(event),
                click = pointer.recv() => Incoming::Click(click),
            },
            None => Incoming::Client(self.events_rx.recv().await),
        };

        match incoming {
            Incoming::Client(event) => Some(self.apply(event?)),
            Incoming::Click(Ok(target)) => {
                self.on_outside_click(target);
                Some(Update::Click(target))
            }
            Incoming::Click(Err(RecvError::Lagged(skipped))) => {
                warn!("Dropped {} pointer events", skipped);
                Some(Update::Stale)
            }
            Incoming::Click(Err(RecvError::Closed)) => {
                debug!("Pointer bus closed, unmounting");
                self.pointer = None;
                Some(Update::Stale)
            }
        }
    }

    /// Apply events until the client is idle
    pub async fn settle(&mut self) -> Vec<Update> {
        let mut updates = Vec::new();
        while !self.is_idle() {
            match self.next_event().await {
                Some(update) => updates.push(update),
                None => break,
            }
        }
        updates
    }

    fn apply(&mut self, event: ClientEvent) -> Update {
        match event {
            ClientEvent::DebounceElapsed { generation, query } => {
                if !self.debouncer.settle(generation) {
                    return Update::Stale;
                }
                self.submit_query(&query);
                Update::DebouncedSearch { query }
            }
            ClientEvent::SearchFinished {
                seq,
                query,
                outcome,
            } => {
                let latest = self.searches.finish(seq);
                if self.settings.discard_stale_responses && !latest {
                    debug!("Discarding stale results for '{}' (#{})", query, seq);
                    return Update::Stale;
                }

                self.state.loading = false;
                match outcome {
                    Ok(response) => {
                        let count = response.results.len();
                        debug!("'{}' returned {} results", query, count);
                        self.state.results = response.into();
                        Update::SearchResults { query, count }
                    }
                    Err(e) => {
                        error!("Search error: {}", e);
                        self.state.results = ResultSet::default();
                        Update::SearchFailed { query }
                    }
                }
            }
            ClientEvent::SuggestionsFinished { seq, outcome } => {
                let latest = self.lookups.finish(seq);
                if self.settings.discard_stale_responses && !latest {
                    return Update::Stale;
                }

                match outcome {
                    Ok(response) => {
                        self.state.suggestions = response.suggestions;
                        Update::Suggestions {
                            count: self.state.suggestions.len(),
                        }
                    }
                    Err(e) => {
                        error!("Suggestions error: {}", e);
                        self.state.suggestions.clear();
                        Update::SuggestionsFailed
                    }
                }
            }
        }
    }
}
