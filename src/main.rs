//! maestro-scripts
//!
//! Command-line companion for the Maestro mobile UI automation tool: queries
//! the on-screen hierarchy and runs flow scripts.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use maestro_config::{Config, ConfigLoader, ConfigValidator, ValidationWarning};

mod cli;
mod cmd_flow;
mod cmd_hierarchy;

use cli::{Cli, Commands};
use cmd_flow::{handle_exec_command, handle_test_command};
use cmd_hierarchy::{handle_elements_command, handle_hierarchy_command, HierarchyArgs};

/// Open `log.txt` in the configured directory.
fn open_log_file(config: &Config) -> Result<(NonBlocking, WorkerGuard, EnvFilter)> {
    let log_dir = Path::new(&config.logging.directory);
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("log")
        .filename_suffix("txt")
        .build(log_dir)
        .context("Failed to open log file")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log level '{}'", config.logging.level))?;

    Ok((non_blocking, guard, file_filter))
}

/// Install the console and file log layers.
///
/// The console writes to stderr so stdout carries nothing but command output.
/// When the log file cannot be opened only the console layer is installed.
/// The returned guard flushes the file writer when dropped.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard, failure) = match open_log_file(config) {
        Ok((writer, guard, filter)) => (
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter),
            ),
            Some(guard),
            None,
        ),
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(console_filter),
        )
        .with(file_layer)
        .init();

    if let Some(e) = failure {
        warn!("File logging disabled: {:#}", e);
    }

    guard
}

/// Resolve and check configuration. Warnings are returned for logging once
/// tracing is up.
fn load_config(path: Option<&Path>) -> Result<(Config, Vec<ValidationWarning>)> {
    let config = ConfigLoader::resolve(path).context("Failed to load configuration")?;

    let validation = ConfigValidator::validate(&config);
    if !validation.is_valid() {
        let errors: Vec<String> = validation.errors.iter().map(|e| e.to_string()).collect();
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok((config, validation.warnings))
}

async fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = load_config(cli.config.as_deref())?;
    let _guard = init_tracing(&config);

    for warning in &warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    debug!("Using Maestro binary: {}", config.binary_path());

    match cli.command {
        Commands::Hierarchy {
            json,
            query,
            search_in,
            parent_levels,
            input,
        } => {
            let args = HierarchyArgs {
                pretty: json,
                query,
                search_in,
                parent_levels,
            };
            handle_hierarchy_command(config, input.as_deref(), args).await
        }
        Commands::Elements {
            json,
            attributes,
            input,
        } => handle_elements_command(config, input.as_deref(), &attributes, json).await,
        Commands::Exec { code, file } => handle_exec_command(config, &code, file).await,
        Commands::Test { files } => handle_test_command(config, &files).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
