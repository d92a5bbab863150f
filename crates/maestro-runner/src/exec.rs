//! Subprocess execution.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::error::RunnerError;

/// Captured outcome of one Maestro invocation. Output is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run `binary` with `args`, capturing its output.
///
/// A non-zero exit is an error whose message prefers stderr, then stdout.
pub(crate) async fn run(
    binary: &str,
    args: &[String],
    limit: Option<Duration>,
    debug_path: Option<&str>,
) -> Result<ExecutionResult, RunnerError> {
    info!("Executing: {} {}", binary, args.join(" "));

    let mut cmd = Command::new(binary);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| {
        warn!("Process error: {}", e);
        RunnerError::Spawn(e)
    })?;

    let output = match limit {
        Some(limit) => timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| RunnerError::Timeout(limit.as_secs()))?,
        None => child.wait_with_output().await,
    }
    .map_err(RunnerError::Spawn)?;

    // Killed by a signal counts as a plain failure.
    let exit_code = output.status.code().unwrap_or(1);
    info!("Exit code: {}", exit_code);

    let result = ExecutionResult {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        exit_code,
    };

    if exit_code != 0 {
        let message = if !result.stderr.is_empty() {
            result.stderr
        } else if !result.stdout.is_empty() {
            result.stdout
        } else {
            format!("Command exited with code {}", exit_code)
        };
        warn!("Command failed: {}", message);

        return Err(RunnerError::CommandFailed {
            exit_code,
            message,
            debug_path: debug_path.map(str::to_string),
        });
    }

    Ok(result)
}

#[cfg(all(test, unix))]
#[path = "exec_tests.rs"]
mod tests;
