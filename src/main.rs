use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use missing_file_report::prelude::*;

#[derive(Parser)]
#[command(name = "missing_file_report")]
#[command(about = "List documentation files with missing-file warnings in a validation log", long_about = None)]
struct Cli {
    /// Validation log to scan
    #[arg(default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Number of documents to list
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Literal text that opens a document header line
    #[arg(long, default_value = DEFAULT_HEADER_PREFIX)]
    header_prefix: String,

    /// Literal text that closes a document header line
    #[arg(long, default_value = DEFAULT_HEADER_SUFFIX)]
    header_suffix: String,

    /// Literal warning marker
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Also write the full report as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let generator = ReportGenerator::new(
        HeaderDecoration::new(cli.header_prefix, cli.header_suffix),
        cli.marker,
    );

    let summary = generator
        .generate_from_file(&cli.log)
        .context("Failed to generate missing-file report")?;

    print_report(&summary.documents, generator.marker(), cli.limit)?;

    if let Some(ref output) = cli.output {
        write_json_report(output, &summary)?;
        eprintln!("Detailed report saved to: {:?}", output);
    }

    Ok(())
}
