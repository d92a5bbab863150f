//! Maestro CLI operations.

use std::io::Write;
use std::time::Duration;

use maestro_config::Config;
use tracing::debug;

use crate::error::RunnerError;
use crate::exec::{run, ExecutionResult};
use crate::formatter::format_flow;

/// Wrapper around the Maestro binary.
pub struct MaestroCli {
    config: Config,
}

impl MaestroCli {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the device screen hierarchy as raw JSON text.
    pub async fn hierarchy(&self) -> Result<String, RunnerError> {
        let result = self.exec(vec!["hierarchy".to_string()]).await?;
        extract_json(&result.stdout)
            .map(str::to_string)
            .ok_or(RunnerError::NoJsonOutput)
    }

    /// Format inline flow code, write it to a temp file and run it.
    ///
    /// The temp file is removed when this returns, whatever the outcome.
    pub async fn run_code(&self, code: &str) -> Result<ExecutionResult, RunnerError> {
        let formatted = format_flow(code);

        let mut flow = tempfile::Builder::new()
            .prefix("maestro-")
            .suffix(".yaml")
            .tempfile()?;
        flow.write_all(formatted.as_bytes())?;
        flow.flush()?;
        debug!(path = %flow.path().display(), "Wrote inline flow");

        let file = flow.path().to_string_lossy().into_owned();
        self.exec(self.test_args(&[file])).await
    }

    /// Run flow files.
    pub async fn run_test(&self, files: &[String]) -> Result<ExecutionResult, RunnerError> {
        self.exec(self.test_args(files)).await
    }

    fn test_args(&self, files: &[String]) -> Vec<String> {
        let mut args = vec!["test".to_string()];
        if let Some(debug_output) = self.config.debug_output_path() {
            args.push("--debug-output".to_string());
            args.push(debug_output.to_string());
            args.push("--flatten-debug-output".to_string());
        }
        args.extend(files.iter().cloned());
        args
    }

    async fn exec(&self, args: Vec<String>) -> Result<ExecutionResult, RunnerError> {
        let limit = self
            .config
            .maestro
            .command_timeout_secs
            .map(Duration::from_secs);
        run(
            self.config.binary_path(),
            &args,
            limit,
            self.config.debug_output_path(),
        )
        .await
    }
}

/// Slice `stdout` from the first `{` or `[`.
///
/// Maestro may print informational lines before the JSON document.
pub fn extract_json(stdout: &str) -> Option<&str> {
    stdout
        .find(['{', '['])
        .map(|start| &stdout[start..])
}

#[cfg(test)]
#[path = "maestro_cli_tests.rs"]
mod tests;
