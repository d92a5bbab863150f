//! `exec` and `test` subcommand handlers.

use anyhow::{Context, Result};
use tracing::info;

use maestro_config::Config;
use maestro_runner::MaestroCli;

/// Handle `exec`: run inline flow commands, or the contents of a file.
pub(crate) async fn handle_exec_command(config: Config, code: &str, from_file: bool) -> Result<()> {
    let code = flow_source(code, from_file).await?;
    let result = MaestroCli::new(config)
        .run_code(&code)
        .await
        .context("Flow execution failed")?;
    println!("{}", result.stdout);
    Ok(())
}

/// Handle `test`.
pub(crate) async fn handle_test_command(config: Config, files: &[String]) -> Result<()> {
    info!("Running {} flow file(s)", files.len());
    let result = MaestroCli::new(config)
        .run_test(files)
        .await
        .context("Flow test failed")?;
    println!("{}", result.stdout);
    Ok(())
}

async fn flow_source(code: &str, from_file: bool) -> Result<String> {
    if from_file {
        tokio::fs::read_to_string(code)
            .await
            .with_context(|| format!("Failed to read flow file {}", code))
    } else {
        Ok(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_inline_source() {
        assert_eq!(flow_source("tapOn: Login", false).await.unwrap(), "tapOn: Login");
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- launchApp").unwrap();

        let code = flow_source(file.path().to_str().unwrap(), true).await.unwrap();
        assert_eq!(code, "- launchApp\n");
    }

    #[tokio::test]
    async fn test_missing_file_source() {
        let err = flow_source("/nonexistent/flow.yaml", true).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/flow.yaml"));
    }
}
