//! HTTP networking module
//!
//! Provides the HTTP client used to reach the search backend.

mod client;

pub use client::HttpClient;
