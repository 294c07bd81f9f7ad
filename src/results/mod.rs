//! Result types exchanged with the search backend
//!
//! Defines the request/response bodies and the result set held by the client.

mod types;

pub use types::*;
