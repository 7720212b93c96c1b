//! Terminal UI
//!
//! - `theme` - colors, icons and the dialoguer prompt theme
//! - `terminal` - capability detection
//! - `context` - resolved output settings for one invocation
//! - `progress` - loading spinner
//! - `widgets` - the tree menu widget

pub mod context;
pub mod progress;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use context::UiContext;
