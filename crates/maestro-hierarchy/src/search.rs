//! Pattern search over node attributes.

use regex::Regex;

use crate::error::HierarchyError;
use crate::node::{Hierarchy, NodeId};
use crate::parent_index::ParentIndex;

/// A matched node together with the nodes from the tree root down to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub node: NodeId,
    pub path: Vec<NodeId>,
}

/// Compile a search pattern.
///
/// Must be called before any traversal so that a bad pattern is reported as
/// such and never mistaken for "no matches". Flags go inline, e.g. `(?i)login`.
pub fn compile_pattern(pattern: &str) -> Result<Regex, HierarchyError> {
    Regex::new(pattern).map_err(|source| HierarchyError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Find every node under `start` (inclusive) with at least one of the
/// `search_in` attributes matching `pattern`.
///
/// Results come back in document (pre-order) order and each node appears at
/// most once. Empty attribute values never match.
pub fn search_hierarchy(
    hierarchy: &Hierarchy,
    start: NodeId,
    pattern: &Regex,
    search_in: &[String],
    parent_index: &ParentIndex,
) -> Vec<SearchResult> {
    let mut results = Vec::new();

    // Seed the path with start's ancestors so paths always begin at the root.
    let mut path = parent_index.path_to(start);
    path.pop();

    let mut stack = vec![(start, path.len())];
    while let Some((id, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(id);

        if node_matches(hierarchy, id, pattern, search_in) {
            results.push(SearchResult {
                node: id,
                path: path.clone(),
            });
        }

        for &child in hierarchy.children(id).iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    results
}

fn node_matches(hierarchy: &Hierarchy, id: NodeId, pattern: &Regex, search_in: &[String]) -> bool {
    search_in.iter().any(|attr| {
        hierarchy
            .attribute(id, attr)
            .is_some_and(|value| !value.is_empty() && pattern.is_match(value))
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
