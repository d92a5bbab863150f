//! Ancestor resolution.

use tracing::debug;

use crate::node::NodeId;
use crate::parent_index::ParentIndex;

/// Climb `levels` parent links from `node`.
///
/// `levels == 0` returns `node` itself. Asking for more levels than exist
/// stops at the root instead of failing.
pub fn find_parent(node: NodeId, levels: usize, parent_index: &ParentIndex) -> NodeId {
    let mut current = node;
    for climbed in 0..levels {
        match parent_index.parent_of(current) {
            Some(parent) => current = parent,
            None => {
                debug!(requested = levels, climbed, "Ancestor walk clamped at root");
                break;
            }
        }
    }
    current
}
