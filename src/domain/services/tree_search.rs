//! Text search over displayed nodes.
//!
//! Case-insensitive substring match on the node label. Only matches and
//! their ancestors survive the filter.

use crate::domain::entities::DisplayNode;

pub fn matches_query(node: &DisplayNode, query: &str) -> bool {
    node.label.to_lowercase().contains(&query.to_lowercase())
}

/// Prune `nodes` to matching nodes and the ancestors leading to them.
///
/// Returns the pruned forest and the number of matching nodes.
pub fn filter_matches(nodes: &[DisplayNode], query: &str) -> (Vec<DisplayNode>, usize) {
    let mut matches = 0;
    let kept = nodes
        .iter()
        .filter_map(|node| prune(node, query, &mut matches))
        .collect();
    (kept, matches)
}

fn prune(node: &DisplayNode, query: &str, matches: &mut usize) -> Option<DisplayNode> {
    let hit = matches_query(node, query);
    if hit {
        *matches += 1;
    }

    let children: Vec<DisplayNode> = node
        .children
        .iter()
        .filter_map(|child| prune(child, query, matches))
        .collect();

    if hit || !children.is_empty() {
        Some(DisplayNode {
            children,
            ..node.clone()
        })
    } else {
        None
    }
}
