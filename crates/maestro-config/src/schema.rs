//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Binary used when nothing else is configured and the default install
/// location is empty; resolved through `PATH`.
pub const DEFAULT_BINARY: &str = "maestro";

/// Default install location of the Maestro CLI.
pub const DEFAULT_BINARY_LOCATION: &str = "~/.maestro/bin/maestro";

/// Default directory for Maestro debug artifacts, relative to the working directory.
pub const DEFAULT_DEBUG_OUTPUT: &str = ".maestro/debug";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maestro: MaestroConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Binary to invoke.
    pub fn binary_path(&self) -> &str {
        self.maestro.binary_path.as_deref().unwrap_or(DEFAULT_BINARY)
    }

    /// Directory passed to `--debug-output`, if any.
    pub fn debug_output_path(&self) -> Option<&str> {
        self.maestro.debug_output_path.as_deref()
    }
}

/// Maestro CLI invocation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaestroConfig {
    /// Path to the Maestro binary.
    #[serde(default)]
    pub binary_path: Option<String>,

    /// Directory for debug artifacts of `maestro test` runs.
    #[serde(default)]
    pub debug_output_path: Option<String>,

    /// Kill a Maestro invocation after this many seconds.
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level written to the log file.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory holding `log.txt`.
    #[serde(default = "default_log_directory")]
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "~/.maestro-scripts".to_string()
}
