//! Terminal rendering functions for tree menu.

use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::FlattenedNode;

/// Render a single tree node to a string
pub fn render_tree_node(node: &FlattenedNode, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active { "> " } else { "  " };

    let state_icon = if node.selected {
        icon(supports_unicode, icons::SELECTED, icons_ascii::SELECTED)
    } else if node.disabled {
        icon(supports_unicode, icons::DISABLED, icons_ascii::DISABLED)
    } else {
        icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
    };

    // Expansion icon (only for nodes with children)
    let expand_icon = if !node.has_children {
        String::from("  ")
    } else if node.expanded {
        format!("{} ", icon(supports_unicode, icons::EXPAND, icons_ascii::EXPAND))
    } else {
        format!(
            "{} ",
            icon(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        )
    };

    format!(
        "{}{}{}{} {}",
        cursor, indent, expand_icon, state_icon, node.label
    )
}

/// Render the status line showing the current selection
pub fn render_status_line(selected: Option<&str>, total: usize) -> String {
    match selected {
        Some(name) => format!("Selected: {} ({} classifications)", name, total),
        None => format!("Selected: none ({} classifications)", total),
    }
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from("[Enter] Select    [←/→] Collapse/Expand    [↑/↓] Move    [q] Quit")
}
