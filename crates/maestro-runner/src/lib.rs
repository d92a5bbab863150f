//! Maestro CLI wrapper.
//!
//! This crate provides:
//! - [`MaestroCli`]: runs `maestro hierarchy` and `maestro test`
//! - [`format_flow`]: normalizes inline flow scripts before they are run
//! - [`extract_json`]: strips the banner Maestro prints ahead of JSON output

mod error;
mod exec;
mod formatter;
mod maestro_cli;

pub use error::RunnerError;
pub use exec::ExecutionResult;
pub use formatter::{format_flow, DEFAULT_HEADER};
pub use maestro_cli::{extract_json, MaestroCli};
