//! TreeMenu state management and action handling.
//!
//! In-process implementation of the [`TreeWidget`] port: keeps the
//! displayed nodes, a single selection, collapsed nodes and the active
//! text search, and queues [`WidgetEvent`]s for the controller.

use std::collections::{HashSet, VecDeque};

use crate::domain::entities::{find_in_forest, walk_forest, DisplayNode};
use crate::domain::ports::{TreeWidget, WidgetEvent};
use crate::domain::services::filter_matches;

use super::render::{render_status_line, render_tree_node};

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedNode {
    pub id: String,
    pub name: String,
    /// Depth level (0 = top level)
    pub depth: usize,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
    /// Whether this node is expanded (for non-leaves)
    pub expanded: bool,
    pub has_children: bool,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Click the node under the cursor
    Activate,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Leave the interactive loop
    Quit,
}

#[derive(Debug, Default)]
pub struct TreeMenu {
    nodes: Vec<DisplayNode>,
    loaded: bool,
    selected: Option<String>,
    collapsed: HashSet<String>,
    search: Option<String>,
    /// Current cursor position in flattened view
    cursor: usize,
    events: VecDeque<WidgetEvent>,
}

impl TreeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes currently shown, after the text search filter
    pub fn visible_nodes(&self) -> Vec<DisplayNode> {
        match &self.search {
            Some(query) => filter_matches(&self.nodes, query).0,
            None => self.nodes.clone(),
        }
    }

    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn flattened_nodes(&self) -> Vec<FlattenedNode> {
        let mut out = Vec::new();
        for node in &self.visible_nodes() {
            self.flatten_node(node, 0, &mut out);
        }
        out
    }

    fn flatten_node(&self, node: &DisplayNode, depth: usize, out: &mut Vec<FlattenedNode>) {
        let expanded = !self.collapsed.contains(&node.id);
        out.push(FlattenedNode {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            label: node.label.clone(),
            selected: self.selected.as_deref() == Some(node.id.as_str()),
            disabled: node.state.disabled,
            expanded,
            has_children: !node.children.is_empty(),
        });

        if expanded {
            for child in &node.children {
                self.flatten_node(child, depth + 1, out);
            }
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Handle a keyboard-style action against the node under the cursor
    pub fn handle_action(&mut self, action: TreeAction) {
        let flattened = self.flattened_nodes();
        let current = flattened.get(self.cursor).cloned();

        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < flattened.len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Activate => {
                if let Some(node) = current {
                    self.select_node(&node.id);
                }
            }
            TreeAction::Expand => {
                if let Some(node) = current.filter(|n| n.has_children) {
                    self.open_node(&node.id);
                }
            }
            TreeAction::Collapse => {
                if let Some(node) = current {
                    self.collapsed.insert(node.id);
                }
            }
            TreeAction::Quit => {}
        }

        let len = self.flattened_nodes().len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Move the cursor onto the first visible node with this name
    pub fn focus(&mut self, name: &str) -> bool {
        match self.flattened_nodes().iter().position(|n| n.name == name) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    /// Render the visible tree to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        let flattened = self.flattened_nodes();
        let mut lines: Vec<String> = flattened
            .iter()
            .enumerate()
            .map(|(i, node)| render_tree_node(node, i == self.cursor, supports_unicode))
            .collect();
        lines.push(String::new());
        lines.push(render_status_line(
            self.selected().map(|n| n.name.as_str()),
            walk_forest(&self.nodes).len(),
        ));
        lines.join("\n")
    }

    fn initial_selection(nodes: &[DisplayNode]) -> Option<String> {
        walk_forest(nodes)
            .into_iter()
            .find(|n| n.state.selected)
            .map(|n| n.id.clone())
    }

    fn push_select_event(&mut self, id: &str) {
        if let Some(node) = find_in_forest(&self.nodes, id) {
            let event = WidgetEvent::SelectNode {
                id: node.id.clone(),
                name: node.name.clone(),
            };
            self.events.push_back(event);
        }
    }
}

impl TreeWidget for TreeMenu {
    fn load(&mut self, nodes: Vec<DisplayNode>) {
        self.selected = Self::initial_selection(&nodes);
        self.nodes = nodes;
        self.loaded = true;
        self.cursor = 0;
        self.collapsed.clear();
    }

    fn refresh(&mut self, nodes: Vec<DisplayNode>) {
        self.nodes = nodes;
        self.loaded = true;

        let kept = self
            .selected
            .take()
            .filter(|id| find_in_forest(&self.nodes, id).is_some());
        match kept {
            // Restoring a selection re-announces it, like a browser tree widget.
            Some(id) => {
                self.push_select_event(&id);
                self.selected = Some(id);
            }
            None => self.selected = Self::initial_selection(&self.nodes),
        }
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn select_node(&mut self, id: &str) -> bool {
        if find_in_forest(&self.nodes, id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        self.push_select_event(id);
        true
    }

    fn deselect_node(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    fn deselect_all(&mut self) {
        self.selected = None;
    }

    fn selected(&self) -> Option<&DisplayNode> {
        self.selected
            .as_deref()
            .and_then(|id| find_in_forest(&self.nodes, id))
    }

    fn open_node(&mut self, id: &str) {
        self.collapsed.remove(id);
        self.events
            .push_back(WidgetEvent::OpenNode { id: id.to_string() });
    }

    fn search(&mut self, text: &str) -> usize {
        let text = text.trim();
        let matches = if text.is_empty() {
            self.search = None;
            walk_forest(&self.nodes).len()
        } else {
            self.search = Some(text.to_string());
            filter_matches(&self.nodes, text).1
        };
        self.cursor = 0;
        self.events.push_back(WidgetEvent::Search {
            text: text.to_string(),
            matches,
        });
        matches
    }

    fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.events.drain(..).collect()
    }
}
