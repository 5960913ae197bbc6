//! KK Segment CLI
//!
//! Batch front end for the respondent segmentation engine.
//!
//! # Commands
//!
//! - `analyze`: Cluster a respondent export and print the dashboard report as JSON
//! - `overview`: Print batch-level demographic counts as JSON
//!
//! Exit code 0 on success, 1 on any error. Logs go to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use kk_segment_core::config::LoggingConfig;

mod commands;

/// KK Segment CLI - Respondent Segmentation and SDG Recommendations
#[derive(Parser)]
#[command(name = "kk-segment")]
#[command(version)]
#[command(about = "Segment KK survey respondents and recommend SDG programs")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster respondents and recommend programs per group
    ///
    /// Reads a JSON array of respondent records and writes the full
    /// dashboard report (event view, needs-support view, overview).
    Analyze(commands::analyze::AnalyzeArgs),
    /// Count respondents by barangay, sex, education, work status and age bracket
    Overview(commands::overview::OverviewArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Analyze(args) => commands::load_config(args.config.as_deref()),
        Commands::Overview(_) => Ok(kk_segment_core::Config::default_config()),
    };

    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(cli.verbose, &logging);

    let exit_code = match config {
        Err(e) => commands::report_error(&e),
        Ok(config) => match cli.command {
            Commands::Analyze(args) => commands::analyze::handle_analyze(args, config),
            Commands::Overview(args) => commands::overview::handle_overview(args),
        },
    };

    std::process::exit(exit_code);
}

/// Install the stderr subscriber.
///
/// With no `-v`, `RUST_LOG` wins over the configured level.
fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location)
        .with_writer(std::io::stderr);

    if logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.pretty().init();
    }
}
