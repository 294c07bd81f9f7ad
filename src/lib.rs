//! AISearch: a debounced search client for AI websites and tools
//!
//! The client captures search box input, issues debounced full-text searches
//! and immediate suggestion lookups against a backend search API, and renders
//! the resulting page state.

pub mod backend;
pub mod categories;
pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod shell;
pub mod view;

pub use backend::{HttpBackend, SearchBackend};
pub use config::Settings;
pub use error::ClientError;
pub use results::{ResultItem, ResultSet};
pub use search::{SearchClient, SearchUiState};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend used when none is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Quiet period before a typed query is searched, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
