//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use hd_core::Config;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Return `Err(ExitCode(N).into())` instead of calling
/// `std::process::exit(N)` so destructors still run.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main.rs downcasts it and prints nothing.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the config named by `--config`, or `hivedump.yml` from the
/// working directory when none was given.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::load_from_dir(Path::new(".")).context("Failed to load config")?,
    };
    log::debug!("Loaded config: {:?}", config);
    Ok(config)
}

/// Read DDL from a file, or from stdin when `input` is `None` or `-`.
pub(crate) fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read DDL from stdin")?;
            Ok(text)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}

/// Write `content` to a file, or to stdout when `output` is `None`.
pub(crate) fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write {}", path))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
