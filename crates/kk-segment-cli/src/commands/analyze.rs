//! `analyze`: run the segmentation pipeline over a respondent export.
//!
//! # Usage
//!
//! ```bash
//! kk-segment analyze --input respondents.json --pretty
//! kk-segment analyze --input respondents.json --config kk.toml --seed 42
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kk_segment_core::{Config, SegmentationPipeline};

use super::{read_records, report_error, write_json, EXIT_SUCCESS};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON array of respondent records
    #[arg(short, long)]
    pub input: PathBuf,

    /// TOML config file (default: config/ directory and KK_SEGMENT__* env vars)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fix clustering and recommendation seeds for a reproducible report
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

pub fn handle_analyze(args: AnalyzeArgs, config: Config) -> i32 {
    match run(&args, config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(args: &AnalyzeArgs, config: Config) -> Result<()> {
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };

    let records = read_records(&args.input)?;
    info!(
        records = records.len(),
        input = %args.input.display(),
        "Loaded respondent records"
    );

    let pipeline = SegmentationPipeline::new(config).context("building pipeline")?;
    let report = pipeline.run(&records).context("running segmentation")?;

    write_json(&report, args.pretty, args.output.as_deref())
}
