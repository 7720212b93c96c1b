//! TreeWidget port
//!
//! The hierarchical selection control that displays [`DisplayNode`]s.
//! Like a browser tree widget it reports user-visible changes as events,
//! which the caller drains and dispatches.

use crate::domain::entities::DisplayNode;

/// Notification emitted by the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A node became selected (by click, programmatically, or on refresh)
    SelectNode { id: String, name: String },
    /// A node was expanded
    OpenNode { id: String },
    /// A text search finished
    Search { text: String, matches: usize },
}

pub trait TreeWidget {
    /// Replace the displayed nodes (first render or re-render after mode change)
    fn load(&mut self, nodes: Vec<DisplayNode>);

    /// Re-read nodes while keeping the current selection when it still exists
    fn refresh(&mut self, nodes: Vec<DisplayNode>);

    fn is_loaded(&self) -> bool;

    /// Select a node by id. Returns `false` when no such node is displayed.
    fn select_node(&mut self, id: &str) -> bool;

    fn deselect_node(&mut self, id: &str);

    /// Clear the selection without emitting events
    fn deselect_all(&mut self);

    fn selected(&self) -> Option<&DisplayNode>;

    fn open_node(&mut self, id: &str);

    /// Show only nodes matching `text` (case-insensitive). Returns match count.
    fn search(&mut self, text: &str) -> usize;

    fn drain_events(&mut self) -> Vec<WidgetEvent>;
}
