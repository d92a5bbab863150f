//! # Maestro Hierarchy
//!
//! Query engine for the UI hierarchy snapshots printed by `maestro hierarchy`.
//!
//! A snapshot is parsed once into a [`Hierarchy`] arena where every node has a
//! [`NodeId`]. All relationships (parent links, search paths, containment) are
//! keyed by `NodeId`, so two structurally identical nodes at different
//! positions always stay distinct.
//!
//! The usual pipeline is:
//! - [`ParentIndex::build`]: child -> parent links
//! - [`search_hierarchy`]: pre-order pattern search with root-to-node paths
//! - [`find_parent`]: climb N levels, clamping at the root
//! - [`deduplicate_subtrees`]: keep only maximal, non-overlapping subtrees
//! - [`extract_subtree`]: owned deep copy of a node and its descendants
//!
//! [`run_query`] wires these together.

mod ancestor;
mod dedup;
mod elements;
mod error;
mod node;
mod parent_index;
mod query;
mod search;
mod subtree;

pub use ancestor::find_parent;
pub use dedup::{contains, deduplicate_subtrees};
pub use elements::{extract_elements, ElementInfo, DEFAULT_ELEMENT_ATTRIBUTES};
pub use error::HierarchyError;
pub use node::{Descendants, Hierarchy, HierarchyNode, NodeData, NodeId};
pub use parent_index::ParentIndex;
pub use query::{run_query, HierarchyQuery, QueryEcho, QueryOutcome, DEFAULT_SEARCH_ATTRIBUTES};
pub use search::{compile_pattern, search_hierarchy, SearchResult};
pub use subtree::extract_subtree;
