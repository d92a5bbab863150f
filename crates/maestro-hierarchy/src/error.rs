//! Hierarchy engine errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed hierarchy: {0}")]
    MalformedTree(#[from] serde_json::Error),
}
