//! # Maestro Config
//!
//! Configuration for maestro-scripts: where the Maestro binary lives, where
//! debug artifacts go, and how logging behaves.
//!
//! Values come from, in order of precedence: environment variables, an
//! optional TOML file (`~/.maestro-scripts/config.toml`), built-in defaults.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::{ConfigLoader, ENV_BINARY_PATH, ENV_COMMAND_TIMEOUT, ENV_DEBUG_OUTPUT};
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
