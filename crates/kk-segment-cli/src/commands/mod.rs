//! Command handlers.
//!
//! Each handler returns the process exit code. Errors are logged and
//! printed to stderr; stdout carries only JSON output.

pub mod analyze;
pub mod overview;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::error;

use kk_segment_core::{Config, RespondentRecord};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Load config from an explicit TOML file, or from the layered sources.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Config::load().context("loading layered configuration"),
    }
}

/// Read a JSON array of respondent records.
pub fn read_records(path: &Path) -> Result<Vec<RespondentRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading input {}", path.display()))?;
    let records: Vec<RespondentRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing respondent records from {}", path.display()))?;
    Ok(records)
}

/// Write JSON to a file, or to stdout when no path is given.
pub fn write_json<T: serde::Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing report")?;

    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("writing output {}", path.display())),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

/// Log an error chain and return the failure exit code.
pub fn report_error(err: &anyhow::Error) -> i32 {
    error!("{:#}", err);
    eprintln!("Error: {:#}", err);
    EXIT_ERROR
}
