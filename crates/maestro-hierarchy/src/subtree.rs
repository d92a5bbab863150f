//! Owned subtree snapshots.

use std::collections::HashMap;

use crate::node::{Hierarchy, HierarchyNode, NodeId};

/// Deep-copy `id` and everything beneath it into an owned tree.
///
/// The copy shares nothing with the hierarchy. Built bottom-up from the
/// reversed pre-order so depth never touches the call stack.
pub fn extract_subtree(hierarchy: &Hierarchy, id: NodeId) -> HierarchyNode {
    let order: Vec<NodeId> = hierarchy.descendants(id).collect();
    let mut built: HashMap<NodeId, HierarchyNode> = HashMap::with_capacity(order.len());

    for &node_id in order.iter().rev() {
        let data = hierarchy.node(node_id);
        // Children come later in pre-order, so they are already built.
        let children = data
            .children
            .iter()
            .filter_map(|child| built.remove(child))
            .collect();

        built.insert(
            node_id,
            HierarchyNode {
                attributes: data.attributes.clone(),
                children,
                extra: data.extra.clone(),
            },
        );
    }

    built.remove(&id).unwrap_or_default()
}
