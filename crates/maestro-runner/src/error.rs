//! Runner errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to execute Maestro: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{}", with_debug_hints(.message, .debug_path.as_deref()))]
    CommandFailed {
        exit_code: i32,
        message: String,
        debug_path: Option<String>,
    },

    #[error("Maestro command timed out after {0} seconds")]
    Timeout(u64),

    #[error("No JSON found in hierarchy output")]
    NoJsonOutput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append instructions for inspecting Maestro's debug artifacts.
fn with_debug_hints(message: &str, debug_path: Option<&str>) -> String {
    let debug_path = debug_path.unwrap_or("~/.maestro/tests/<timestamp>");
    format!(
        "{message}

Debug files available at: {debug_path}

Files to inspect:
- commands-*.json: Contains error details and UI hierarchy at time of failure (hierarchy in error.hierarchyRoot field)
- screenshot-*.png: Visual state at failure
- maestro.log: Large file - use Grep to search for specific errors instead of reading entire file"
    )
}
