//! Hierarchy tree model.
//!
//! [`HierarchyNode`] is the owned, serde-facing shape of one UI element.
//! [`Hierarchy`] is the arena the engine queries: nodes are numbered in
//! pre-order at load time and referenced by [`NodeId`] from then on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HierarchyError;

/// One UI element as emitted by the automation binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Element attributes (`text`, `resource-id`, `content-desc`, ...).
    pub attributes: BTreeMap<String, String>,

    /// Child elements in display order.
    pub children: Vec<HierarchyNode>,

    /// Any other fields of the node object (`clickable`, `enabled`, ...),
    /// carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HierarchyNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: HierarchyNode) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

// Unlinks descendants onto a heap stack so deep trees drop without recursion.
impl Drop for HierarchyNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Identity of a node inside one [`Hierarchy`].
///
/// Ids are dense and assigned in pre-order, so the root is always id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena entry for one node.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub attributes: BTreeMap<String, String>,
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub children: Vec<NodeId>,
}

/// A parsed UI snapshot.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<NodeData>,
}

impl Hierarchy {
    /// Parse a JSON document into a hierarchy.
    ///
    /// The document root must be a node object with `attributes` and
    /// `children`; anything else is rejected without partial recovery.
    ///
    /// Nesting depth is not limited; the stack grows on the heap as needed.
    pub fn parse(json: &str) -> Result<Self, HierarchyError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let root = HierarchyNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(Self::from_tree(root))
    }

    /// Build the arena from an owned tree.
    pub fn from_tree(root: HierarchyNode) -> Self {
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut stack: Vec<(HierarchyNode, Option<NodeId>)> = vec![(root, None)];

        while let Some((mut node, parent)) = stack.pop() {
            let id = NodeId(nodes.len());
            let children = std::mem::take(&mut node.children);

            nodes.push(NodeData {
                attributes: std::mem::take(&mut node.attributes),
                extra: std::mem::take(&mut node.extra),
                children: Vec::with_capacity(children.len()),
            });
            if let Some(parent) = parent {
                nodes[parent.0].children.push(id);
            }

            // Reversed so the first child is popped (and numbered) next.
            for child in children.into_iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena entry for a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this hierarchy.
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Get an attribute value of a node. Absent keys yield `None`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attributes.get(name).map(String::as_str)
    }

    /// Iterate a node and all of its descendants in pre-order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            hierarchy: self,
            stack: vec![id],
        }
    }

    /// Iterate every node id in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

/// Pre-order iterator over a subtree, driven by an explicit stack.
pub struct Descendants<'a> {
    hierarchy: &'a Hierarchy,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.hierarchy.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
