//! Report writing functionality

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::generator::ScanSummary;

/// Number of documents listed on the console
pub const DEFAULT_DISPLAY_LIMIT: usize = 30;

/// Write the console summary
///
/// # Arguments
/// * `out` - Destination writer
/// * `documents` - Warned documents, already sorted
/// * `marker` - Warning marker named in the count line
/// * `limit` - Maximum number of documents listed after the count line
pub fn write_summary<W: Write>(
    out: &mut W,
    documents: &[String],
    marker: &str,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "Found {} files with {} warnings", documents.len(), marker)?;
    for (idx, document) in documents.iter().take(limit).enumerate() {
        writeln!(out, "{:>2}: {}", idx + 1, document)?;
    }
    Ok(())
}

/// Print the summary to stdout
pub fn print_report(documents: &[String], marker: &str, limit: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, documents, marker, limit)?;
    handle.flush()
}

/// Write the full scan summary as pretty JSON
///
/// Unlike the console output, every document is included.
pub fn write_json_report(output_path: &Path, summary: &ScanSummary) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary).context("Failed to write report")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
