//! Configuration validation.

use std::path::Path;

use crate::schema::Config;

/// Levels accepted by `logging.level`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_maestro(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_maestro(config: &Config, result: &mut ValidationResult) {
        let binary = config.binary_path();
        if binary.trim().is_empty() {
            result.add_error(ValidationError::new(
                "maestro.binary_path",
                "Binary path cannot be empty",
            ));
        } else if Path::new(binary).is_absolute() && !Path::new(binary).exists() {
            result.add_warning(ValidationWarning::new(
                "maestro.binary_path",
                format!("Maestro binary does not exist: {}", binary),
            ));
        }

        match config.maestro.command_timeout_secs {
            Some(0) => result.add_error(ValidationError::new(
                "maestro.command_timeout_secs",
                "command_timeout_secs must be greater than 0",
            )),
            Some(secs) if secs > 3600 => result.add_warning(ValidationWarning::new(
                "maestro.command_timeout_secs",
                "command_timeout_secs is very high (>1h), a hung device will block for a long time",
            )),
            _ => {}
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if config.logging.directory.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.directory",
                "Log directory cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
