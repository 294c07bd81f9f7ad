//! Search backend abstraction
//!
//! The client only talks to the backend through [`SearchBackend`], so the
//! HTTP implementation can be swapped for a scripted one in tests.

mod http;
mod traits;

pub use http::HttpBackend;
pub use traits::SearchBackend;

/// Path of the full-text search endpoint
pub const SEARCH_PATH: &str = "/api/search";

/// Path of the suggestion lookup endpoint
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";
