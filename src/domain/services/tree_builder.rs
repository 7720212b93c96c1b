//! Classification tree construction.
//!
//! Builds the display forest (group view) or list (flat view) from a
//! registry snapshot and an entity count index. The result depends only
//! on the inputs; callers own any state derived from it.
//!
//! The empty filter applies to top-level nodes only. A root that passes
//! the filter keeps all of its descendants, including unused ones, and an
//! unused root hides used descendants.

use crate::domain::entities::{
    ClassificationRegistry, ClassificationType, DisplayNode, EntityCountIndex, NodeState,
    CLASSIFICATION_GTYPE, TAG_ICON,
};
use crate::domain::value_objects::{node_label, TreeOptions};

/// Problems found while building that did not stop the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDiagnostic {
    /// `subTypes` lead back to an ancestor; the repeated edge was dropped
    Cycle { path: Vec<String> },
}

/// Output of [`build_tree`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuild {
    pub nodes: Vec<DisplayNode>,
    /// Guid of the first classification named like the selected tag
    pub matched_guid: Option<String>,
    pub diagnostics: Vec<TreeDiagnostic>,
}

/// Build the nodes handed to the tree widget.
///
/// `selected_tag` is the tag name from the current search parameters.
pub fn build_tree(
    registry: &ClassificationRegistry,
    counts: &EntityCountIndex,
    options: TreeOptions,
    selected_tag: Option<&str>,
) -> TreeBuild {
    let mut builder = Builder {
        registry,
        counts,
        selected_tag,
        matched_guid: None,
        diagnostics: Vec::new(),
    };

    let mut nodes = Vec::new();
    for ty in registry.iter() {
        let selected = builder.note_selection(ty);

        let node = if options.group_view {
            if !ty.is_root() {
                continue;
            }
            let mut path = vec![ty.name.clone()];
            let children = builder.children_of(ty, &mut path);
            builder.node(ty, None, children, selected)
        } else {
            builder.node(ty, None, Vec::new(), selected)
        };

        if options.show_empty || counts.is_used(&ty.name) {
            nodes.push(node);
        }
    }

    TreeBuild {
        nodes,
        matched_guid: builder.matched_guid,
        diagnostics: builder.diagnostics,
    }
}

struct Builder<'a> {
    registry: &'a ClassificationRegistry,
    counts: &'a EntityCountIndex,
    selected_tag: Option<&'a str>,
    matched_guid: Option<String>,
    diagnostics: Vec<TreeDiagnostic>,
}

impl Builder<'_> {
    fn note_selection(&mut self, ty: &ClassificationType) -> bool {
        let selected = self.selected_tag == Some(ty.name.as_str());
        if selected && self.matched_guid.is_none() {
            self.matched_guid = Some(ty.guid.clone());
        }
        selected
    }

    /// `path` holds the names from the root down to `parent`, inclusive.
    fn children_of(
        &mut self,
        parent: &ClassificationType,
        path: &mut Vec<String>,
    ) -> Vec<DisplayNode> {
        let registry = self.registry;
        let mut children = Vec::new();

        for child_name in parent.sub_types() {
            let Some(child) = registry.get(child_name) else {
                log::debug!(
                    "sub-type '{}' of '{}' is not in the registry; skipped",
                    child_name,
                    parent.name
                );
                continue;
            };

            if path.iter().any(|ancestor| ancestor == child_name) {
                let mut cycle = path.clone();
                cycle.push(child_name.clone());
                log::warn!("classification cycle detected: {}", cycle.join(" -> "));
                self.diagnostics.push(TreeDiagnostic::Cycle { path: cycle });
                continue;
            }

            let selected = self.note_selection(child);
            path.push(child_name.clone());
            let grandchildren = self.children_of(child, path);
            path.pop();

            children.push(self.node(child, Some(&parent.name), grandchildren, selected));
        }

        children
    }

    fn node(
        &self,
        ty: &ClassificationType,
        parent: Option<&str>,
        children: Vec<DisplayNode>,
        selected: bool,
    ) -> DisplayNode {
        DisplayNode {
            id: ty.guid.clone(),
            name: ty.name.clone(),
            label: node_label(&ty.name, self.counts.get(&ty.name)),
            node_type: ty.category.clone(),
            icon: TAG_ICON,
            g_type: CLASSIFICATION_GTYPE,
            parent: parent.map(str::to_string),
            state: NodeState {
                selected,
                opened: true,
                disabled: self.counts.is_recorded_empty(&ty.name),
            },
            children,
        }
    }
}
