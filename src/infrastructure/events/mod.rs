//! Notifier Implementations
//!
//! Provides concrete implementations of Notifier:
//! - ConsoleNotifier: human-readable notices and interactive confirmations
//! - JsonNotifier: NDJSON output for automation

mod console;
mod json;

pub use console::{format_notice, ConsoleNotifier};
pub use json::JsonNotifier;
