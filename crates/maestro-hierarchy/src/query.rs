//! Query orchestration.

use serde::Serialize;
use tracing::{debug, info};

use crate::ancestor::find_parent;
use crate::dedup::deduplicate_subtrees;
use crate::error::HierarchyError;
use crate::node::{Hierarchy, HierarchyNode, NodeId};
use crate::parent_index::ParentIndex;
use crate::search::{compile_pattern, search_hierarchy};
use crate::subtree::extract_subtree;

/// Attributes searched when the caller does not choose any.
pub const DEFAULT_SEARCH_ATTRIBUTES: [&str; 3] = ["text", "resource-id", "content-desc"];

/// A hierarchy query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyQuery {
    /// Regular expression matched against attribute values.
    pub query: String,
    /// Attribute names to test, in order.
    pub search_in: Vec<String>,
    /// How many levels to climb from each match.
    pub parent_levels: usize,
}

impl HierarchyQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_in: DEFAULT_SEARCH_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            parent_levels: 0,
        }
    }

    pub fn with_search_in(mut self, search_in: Vec<String>) -> Self {
        self.search_in = search_in;
        self
    }

    pub fn with_parent_levels(mut self, parent_levels: usize) -> Self {
        self.parent_levels = parent_levels;
        self
    }

    fn echo(&self) -> QueryEcho {
        QueryEcho {
            message: "No matches found".to_string(),
            query: self.query.clone(),
            search_in: self.search_in.clone(),
            parent_levels: self.parent_levels,
        }
    }
}

/// Query parameters echoed back when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    pub message: String,
    pub query: String,
    pub search_in: Vec<String>,
    pub parent_levels: usize,
}

/// Result of [`run_query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Maximal non-overlapping subtrees, in first-acceptance order. Never empty.
    Matches(Vec<HierarchyNode>),
    /// Nothing matched.
    NoMatches(QueryEcho),
}

/// Search, climb, deduplicate and snapshot.
///
/// The pattern is compiled before anything is traversed. Deduplication works
/// on node identities, so it runs on the resolved ancestors and only the
/// survivors are copied out.
pub fn run_query(hierarchy: &Hierarchy, query: &HierarchyQuery) -> Result<QueryOutcome, HierarchyError> {
    let pattern = compile_pattern(&query.query)?;
    let parent_index = ParentIndex::build(hierarchy);

    let results = search_hierarchy(
        hierarchy,
        hierarchy.root(),
        &pattern,
        &query.search_in,
        &parent_index,
    );
    if results.is_empty() {
        info!(query = %query.query, "No matches found");
        return Ok(QueryOutcome::NoMatches(query.echo()));
    }

    let targets: Vec<NodeId> = results
        .iter()
        .map(|result| find_parent(result.node, query.parent_levels, &parent_index))
        .collect();
    let survivors = deduplicate_subtrees(hierarchy, &targets);

    debug!(
        matches = results.len(),
        subtrees = survivors.len(),
        parent_levels = query.parent_levels,
        "Query resolved"
    );

    Ok(QueryOutcome::Matches(
        survivors
            .into_iter()
            .map(|id| extract_subtree(hierarchy, id))
            .collect(),
    ))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
