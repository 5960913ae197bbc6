//! `overview`: demographic counts without clustering.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use kk_segment_core::DemographicOverview;

use super::{read_records, report_error, write_json, EXIT_SUCCESS};

/// Arguments for the overview command.
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// JSON array of respondent records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the overview here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn handle_overview(args: OverviewArgs) -> i32 {
    let result = read_records(&args.input).and_then(|records| {
        let overview = DemographicOverview::from_records(&records);
        info!(
            respondents = overview.total_respondents,
            barangays = overview.total_barangays,
            "Computed demographic overview"
        );
        write_json(&overview, args.pretty, args.output.as_deref())
    });

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}
