//! Display node entity
//!
//! Nodes are rebuilt from the registry on every render and handed to the
//! tree widget. Nothing mutates them across renders.

use serde::Serialize;

/// Icon class attached to every classification node
pub const TAG_ICON: &str = "fa fa-tag";

/// Node kind understood by the tree widget
pub const CLASSIFICATION_GTYPE: &str = "Classification";

/// Widget state flags of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeState {
    pub selected: bool,
    pub opened: bool,
    pub disabled: bool,
}

/// A node of the rendered classification tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    /// Guid of the underlying classification
    pub id: String,
    pub name: String,
    /// Name, plus the formatted entity count when it is non-zero
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub icon: &'static str,
    pub g_type: &'static str,
    /// Name of the parent this node was attached under (group view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub state: NodeState,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order walk over this node and all descendants
    pub fn walk(&self) -> Vec<&DisplayNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    /// Number of nodes in this subtree, including itself
    pub fn total_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.total_count()).sum::<usize>()
    }
}

/// Pre-order walk over a forest
pub fn walk_forest(nodes: &[DisplayNode]) -> Vec<&DisplayNode> {
    nodes.iter().flat_map(|n| n.walk()).collect()
}

/// First node (pre-order) with the given id
pub fn find_in_forest<'a>(nodes: &'a [DisplayNode], id: &str) -> Option<&'a DisplayNode> {
    walk_forest(nodes).into_iter().find(|n| n.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<DisplayNode>) -> DisplayNode {
        DisplayNode {
            id: format!("guid-{}", name),
            name: name.to_string(),
            label: name.to_string(),
            node_type: "CLASSIFICATION".to_string(),
            icon: TAG_ICON,
            g_type: CLASSIFICATION_GTYPE,
            parent: None,
            state: NodeState::default(),
            children,
        }
    }

    #[test]
    fn walk_is_pre_order() {
        let forest = vec![
            node("A", vec![node("B", vec![node("C", vec![])])]),
            node("D", vec![]),
        ];
        let names: Vec<_> = walk_forest(&forest).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(forest[0].total_count(), 3);
    }

    #[test]
    fn find_by_id() {
        let forest = vec![node("A", vec![node("B", vec![])])];
        assert_eq!(find_in_forest(&forest, "guid-B").unwrap().name, "B");
        assert!(find_in_forest(&forest, "guid-Z").is_none());
    }

    #[test]
    fn serializes_widget_shape() {
        let json = serde_json::to_value(node("A", vec![])).unwrap();
        assert_eq!(json["type"], "CLASSIFICATION");
        assert_eq!(json["gType"], "Classification");
        assert!(json.get("children").is_none());
        assert!(json.get("parent").is_none());
    }
}
