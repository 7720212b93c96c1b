//! Output Rendering
//!
//! Renders the state left behind by a command: the tree as the widget
//! shows it, plus the navigation requests the command issued.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::domain::entities::walk_forest;
use crate::domain::ports::{TreeWidget, UrlRequest};
use crate::domain::services::TreeDiagnostic;
use crate::domain::value_objects::TreeOptions;
use crate::ui::theme::colors;
use crate::ui::widgets::tree_menu::{render_status_line, render_tree_node};
use crate::ui::widgets::TreeMenu;

/// Everything a command prints once it has run
pub struct TreeReport<'a> {
    pub menu: &'a TreeMenu,
    pub options: TreeOptions,
    pub navigations: &'a [UrlRequest],
    pub diagnostics: &'a [TreeDiagnostic],
}

/// Text renderer for tree reports
pub struct TextRenderer {
    pub color: bool,
    pub unicode: bool,
}

impl TextRenderer {
    pub fn render(&self, report: &TreeReport<'_>) -> String {
        let mut lines = vec![self.header(report.options)];

        let flattened = report.menu.flattened_nodes();
        if flattened.is_empty() {
            let empty = match report.menu.active_search() {
                Some(text) => format!("  No classifications match '{}'", text),
                None => "  No classifications".to_string(),
            };
            lines.push(empty);
        }
        for node in &flattened {
            let line = render_tree_node(node, false, self.unicode);
            if self.color && node.disabled && !node.selected {
                lines.push(format!("{}", line.with(colors::DIM)));
            } else {
                lines.push(line);
            }
        }

        lines.push(String::new());
        let total = walk_forest(report.menu.nodes()).len();
        lines.push(render_status_line(
            report.menu.selected().map(|n| n.name.as_str()),
            total,
        ));

        for diagnostic in report.diagnostics {
            match diagnostic {
                TreeDiagnostic::Cycle { path } => {
                    lines.push(format!("warning: hierarchy cycle {}", path.join(" -> ")));
                }
            }
        }

        for request in report.navigations {
            let arrow = if self.unicode { "→" } else { "->" };
            let url = request.full_url();
            if self.color {
                lines.push(format!("{} {}", arrow.with(colors::INFO), url));
            } else {
                lines.push(format!("{} {}", arrow, url));
            }
        }

        lines.join("\n")
    }

    fn header(&self, options: TreeOptions) -> String {
        let view = if options.group_view { "group" } else { "flat" };
        let empty = if options.show_empty {
            "showing unused"
        } else {
            "hiding unused"
        };
        let title = format!("Classifications ({} view, {})", view, empty);
        if self.color {
            format!("{}", title.bold())
        } else {
            title
        }
    }
}

/// Write the report as NDJSON: one `tree` event, then one `navigate` event per request
pub fn write_json_report<W: Write>(out: &mut W, report: &TreeReport<'_>) -> io::Result<()> {
    let diagnostics: Vec<String> = report
        .diagnostics
        .iter()
        .map(|d| match d {
            TreeDiagnostic::Cycle { path } => path.join(" -> "),
        })
        .collect();

    let tree = serde_json::json!({
        "event": "tree",
        "show_empty": report.options.show_empty,
        "group_view": report.options.group_view,
        "selected": report.menu.selected_id(),
        "search": report.menu.active_search(),
        "nodes": report.menu.visible_nodes(),
        "cycles": diagnostics,
    });
    writeln!(out, "{}", tree)?;

    for request in report.navigations {
        let event = serde_json::json!({
            "event": "navigate",
            "url": request.full_url(),
            "trigger": request.trigger,
            "update_tab_state": request.update_tab_state,
        });
        writeln!(out, "{}", event)?;
    }
    out.flush()
}
