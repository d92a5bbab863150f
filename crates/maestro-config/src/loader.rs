//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::{Config, DEFAULT_BINARY_LOCATION, DEFAULT_DEBUG_OUTPUT};

/// Overrides the Maestro binary path.
pub const ENV_BINARY_PATH: &str = "MAESTRO_BINARY_PATH";
/// Overrides the debug artifact directory.
pub const ENV_DEBUG_OUTPUT: &str = "MAESTRO_DEBUG_OUTPUT";
/// Overrides the per-command timeout, in seconds.
pub const ENV_COMMAND_TIMEOUT: &str = "MAESTRO_COMMAND_TIMEOUT";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// `~/.maestro-scripts/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".maestro-scripts").join("config.toml"))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, the default file is used
    /// when present. Environment variables are applied on top.
    pub fn resolve(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default)?,
                _ => Config::default(),
            },
        };

        Self::apply_overrides(
            config,
            |name| std::env::var(name).ok(),
            |path| Path::new(path).exists(),
        )
    }

    /// Apply environment overrides and fill in defaults.
    ///
    /// `env` looks up a variable; empty values count as unset. `exists`
    /// decides whether the default binary location is installed.
    pub fn apply_overrides(
        mut config: Config,
        env: impl Fn(&str) -> Option<String>,
        exists: impl Fn(&str) -> bool,
    ) -> Result<Config, ConfigError> {
        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        if let Some(binary) = lookup(ENV_BINARY_PATH) {
            config.maestro.binary_path = Some(binary);
        }
        config.maestro.binary_path = match config.maestro.binary_path.take() {
            Some(binary) => Some(Self::expand_path(&binary)),
            None => {
                let installed = Self::expand_path(DEFAULT_BINARY_LOCATION);
                exists(&installed).then_some(installed)
            }
        };

        if let Some(debug_output) = lookup(ENV_DEBUG_OUTPUT) {
            config.maestro.debug_output_path = Some(debug_output);
        }
        config.maestro.debug_output_path = Some(Self::expand_path(
            config
                .maestro
                .debug_output_path
                .as_deref()
                .unwrap_or(DEFAULT_DEBUG_OUTPUT),
        ));

        if let Some(timeout) = lookup(ENV_COMMAND_TIMEOUT) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_COMMAND_TIMEOUT.to_string(),
                    message: format!("expected a number of seconds ({})", e),
                })?;
            config.maestro.command_timeout_secs = Some(secs);
        }

        config.logging.directory = Self::expand_path(&config.logging.directory);

        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.maestro`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
