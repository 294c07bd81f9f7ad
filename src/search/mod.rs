//! Search orchestration module
//!
//! Owns the search box state: keystrokes, debounced dispatch, suggestion
//! lookups, and the dropdown's outside-click handling.

mod client;
mod debounce;
mod pointer;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{SearchClient, Update};
pub use debounce::Debouncer;
pub use pointer::{pointer_bus, ClickTarget, PointerBus};
pub use state::SearchUiState;
