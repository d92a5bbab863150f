//! CLI definitions for maestro-scripts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// maestro-scripts CLI.
#[derive(Parser)]
#[command(name = "maestro-scripts")]
#[command(about = "Inspect and drive Maestro mobile UI automation")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.maestro-scripts/config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the screen hierarchy, optionally filtered by a pattern
    Hierarchy {
        /// Pretty-print the JSON output
        #[arg(long)]
        json: bool,

        /// Regular expression matched against attribute values, e.g. "(?i)login"
        #[arg(short, long)]
        query: Option<String>,

        /// Attributes to search
        #[arg(long, num_args = 1.., default_values_t = default_search_in())]
        search_in: Vec<String>,

        /// Ancestor levels to climb from each match
        #[arg(short, long, default_value_t = 0)]
        parent_levels: usize,

        /// Read a saved hierarchy JSON file instead of querying the device
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List the non-empty text and identifier attributes on screen
    Elements {
        /// Pretty-print the JSON output
        #[arg(long)]
        json: bool,

        /// Attributes to collect
        #[arg(long, num_args = 1.., default_values_t = default_element_attributes())]
        attributes: Vec<String>,

        /// Read a saved hierarchy JSON file instead of querying the device
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Run inline flow commands
    Exec {
        /// Flow commands, or a path to a flow file with --file
        code: String,

        /// Treat CODE as a file path
        #[arg(short, long)]
        file: bool,
    },

    /// Run flow files
    Test {
        /// Flow files to run
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn default_search_in() -> Vec<String> {
    maestro_hierarchy::DEFAULT_SEARCH_ATTRIBUTES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_element_attributes() -> Vec<String> {
    maestro_hierarchy::DEFAULT_ELEMENT_ATTRIBUTES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_defaults() {
        let cli = Cli::try_parse_from(["maestro-scripts", "hierarchy"]).unwrap();
        match cli.command {
            Commands::Hierarchy {
                json,
                query,
                search_in,
                parent_levels,
                input,
            } => {
                assert!(!json);
                assert!(query.is_none());
                assert_eq!(search_in, vec!["text", "resource-id", "content-desc"]);
                assert_eq!(parent_levels, 0);
                assert!(input.is_none());
            }
            _ => panic!("Expected hierarchy command"),
        }
    }

    #[test]
    fn test_hierarchy_query_flags() {
        let cli = Cli::try_parse_from([
            "maestro-scripts",
            "hierarchy",
            "-q",
            "Login",
            "--search-in",
            "text",
            "accessibilityText",
            "-p",
            "2",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Hierarchy {
                json,
                query,
                search_in,
                parent_levels,
                ..
            } => {
                assert!(json);
                assert_eq!(query.as_deref(), Some("Login"));
                assert_eq!(search_in, vec!["text", "accessibilityText"]);
                assert_eq!(parent_levels, 2);
            }
            _ => panic!("Expected hierarchy command"),
        }
    }

    #[test]
    fn test_negative_parent_levels_rejected() {
        let result = Cli::try_parse_from(["maestro-scripts", "hierarchy", "-q", "x", "-p", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_elements_defaults() {
        let cli = Cli::try_parse_from(["maestro-scripts", "elements"]).unwrap();
        match cli.command {
            Commands::Elements { attributes, .. } => {
                assert_eq!(
                    attributes,
                    vec!["text", "resource-id", "content-desc", "accessibilityText"]
                );
            }
            _ => panic!("Expected elements command"),
        }
    }

    #[test]
    fn test_exec_with_file_flag() {
        let cli = Cli::try_parse_from(["maestro-scripts", "exec", "flow.yaml", "--file"]).unwrap();
        match cli.command {
            Commands::Exec { code, file } => {
                assert_eq!(code, "flow.yaml");
                assert!(file);
            }
            _ => panic!("Expected exec command"),
        }
    }

    #[test]
    fn test_test_requires_files() {
        assert!(Cli::try_parse_from(["maestro-scripts", "test"]).is_err());

        let cli = Cli::try_parse_from(["maestro-scripts", "test", "a.yaml", "b.yaml"]).unwrap();
        match cli.command {
            Commands::Test { files } => assert_eq!(files, vec!["a.yaml", "b.yaml"]),
            _ => panic!("Expected test command"),
        }
    }

    #[test]
    fn test_global_config_option() {
        let cli =
            Cli::try_parse_from(["maestro-scripts", "elements", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
    }
}
