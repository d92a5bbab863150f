//! Overlapping subtree removal.

use crate::node::{Hierarchy, NodeId};

/// Whether `inner` is `outer` itself or reachable by descending from it.
///
/// Identity based: structurally equal nodes at different positions are not
/// contained in each other.
pub fn contains(hierarchy: &Hierarchy, outer: NodeId, inner: NodeId) -> bool {
    outer == inner || hierarchy.descendants(outer).any(|id| id == inner)
}

/// Reduce `candidates` to a minimal set of maximal, non-overlapping subtrees.
///
/// Candidates are processed in order. One already covered by an accepted
/// subtree is dropped; otherwise it evicts every accepted subtree it covers
/// and is appended. The result keeps first-acceptance order.
pub fn deduplicate_subtrees(hierarchy: &Hierarchy, candidates: &[NodeId]) -> Vec<NodeId> {
    let mut accepted: Vec<NodeId> = Vec::with_capacity(candidates.len());

    for &candidate in candidates {
        if accepted
            .iter()
            .any(|&existing| contains(hierarchy, existing, candidate))
        {
            continue;
        }

        accepted.retain(|&existing| !contains(hierarchy, candidate, existing));
        accepted.push(candidate);
    }

    accepted
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;
