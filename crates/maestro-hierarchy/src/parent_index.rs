//! Child -> parent lookup.

use std::collections::HashMap;

use crate::node::{Hierarchy, NodeId};

/// Mapping from every non-root node to its immediate parent.
///
/// The root has no entry. The index is derived state: build a fresh one for
/// each hierarchy and drop it with the query.
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    parents: HashMap<NodeId, NodeId>,
}

impl ParentIndex {
    /// Walk the whole hierarchy once and record each child's parent.
    pub fn build(hierarchy: &Hierarchy) -> Self {
        let mut parents = HashMap::with_capacity(hierarchy.len().saturating_sub(1));

        for id in hierarchy.descendants(hierarchy.root()) {
            for &child in hierarchy.children(id) {
                parents.insert(child, id);
            }
        }

        Self { parents }
    }

    /// Immediate parent, or `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// Number of recorded parent links.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Sequence of nodes from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}
