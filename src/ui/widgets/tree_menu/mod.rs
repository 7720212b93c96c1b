//! Tree Menu Widget
//!
//! Terminal tree control for classifications. Implements the
//! [`TreeWidget`](crate::domain::ports::TreeWidget) port.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{FlattenedNode, TreeAction, TreeMenu};
pub use render::{render_help_bar, render_status_line, render_tree_node};
