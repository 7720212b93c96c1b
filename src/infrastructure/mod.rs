//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON file store for classifications, counts and session state
//! - `navigation/` - Navigator recording requests and the search tab URL
//! - `events/` - Notifiers (console, NDJSON)

pub mod events;
pub mod navigation;
pub mod repositories;

// Re-export for convenience
pub use events::{ConsoleNotifier, JsonNotifier};
pub use navigation::SessionNavigator;
pub use repositories::JsonStore;
