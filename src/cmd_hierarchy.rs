//! `hierarchy` and `elements` subcommand handlers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use maestro_config::Config;
use maestro_hierarchy::{
    extract_elements, extract_subtree, run_query, Hierarchy, HierarchyQuery, QueryOutcome,
};
use maestro_runner::MaestroCli;

/// Options of the `hierarchy` subcommand.
pub(crate) struct HierarchyArgs {
    pub pretty: bool,
    pub query: Option<String>,
    pub search_in: Vec<String>,
    pub parent_levels: usize,
}

/// Handle `hierarchy`.
pub(crate) async fn handle_hierarchy_command(
    config: Config,
    input: Option<&Path>,
    args: HierarchyArgs,
) -> Result<()> {
    let snapshot = load_snapshot(config, input).await?;
    println!("{}", render_hierarchy(&snapshot, &args)?);
    Ok(())
}

/// Handle `elements`.
pub(crate) async fn handle_elements_command(
    config: Config,
    input: Option<&Path>,
    attributes: &[String],
    pretty: bool,
) -> Result<()> {
    let snapshot = load_snapshot(config, input).await?;
    println!("{}", render_elements(&snapshot, attributes, pretty)?);
    Ok(())
}

/// Read a saved snapshot, or ask the device for a fresh one.
async fn load_snapshot(config: Config, input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            info!("Reading hierarchy from {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read hierarchy file {}", path.display()))
        }
        None => MaestroCli::new(config)
            .hierarchy()
            .await
            .context("Failed to fetch hierarchy"),
    }
}

/// Render the `hierarchy` output for a raw JSON snapshot.
///
/// A single surviving subtree is printed as an object, several as an array.
pub(crate) fn render_hierarchy(snapshot: &str, args: &HierarchyArgs) -> Result<String> {
    let hierarchy = Hierarchy::parse(snapshot).context("Invalid hierarchy JSON")?;

    let Some(pattern) = &args.query else {
        return to_json(&extract_subtree(&hierarchy, hierarchy.root()), args.pretty);
    };

    let query = HierarchyQuery::new(pattern.as_str())
        .with_search_in(args.search_in.clone())
        .with_parent_levels(args.parent_levels);

    match run_query(&hierarchy, &query)? {
        QueryOutcome::NoMatches(echo) => to_json(&echo, args.pretty),
        QueryOutcome::Matches(mut subtrees) if subtrees.len() == 1 => {
            to_json(&subtrees.remove(0), args.pretty)
        }
        QueryOutcome::Matches(subtrees) => to_json(&subtrees, args.pretty),
    }
}

/// Render the `elements` output for a raw JSON snapshot.
pub(crate) fn render_elements(snapshot: &str, attributes: &[String], pretty: bool) -> Result<String> {
    let hierarchy = Hierarchy::parse(snapshot).context("Invalid hierarchy JSON")?;
    let elements = extract_elements(&hierarchy, attributes);
    info!("Extracted {} elements", elements.len());
    to_json(&elements, pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
#[path = "cmd_hierarchy_tests.rs"]
mod tests;
