//! Line-oriented terminal front end
//!
//! Reads commands from an async line source, feeds them to the search client
//! and redraws the page after every change.

mod command;
mod session;

pub use command::{Command, HELP};
pub use session::{Flow, Session};
