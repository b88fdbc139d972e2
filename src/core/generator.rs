//! Missing-file report generation

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use super::error::ReportError;
use super::header::HeaderDecoration;
use crate::scanner::log_reader::read_log;

/// Literal marker of a missing-file warning line
pub const DEFAULT_MARKER: &str = "missing-file";

/// Outcome of scanning one log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Warned documents, ascending and unique
    pub documents: Vec<String>,
    pub lines_scanned: usize,
    pub headers_seen: usize,
    pub warning_lines: usize,
    /// Warning lines seen before the first header
    pub unattributed_warnings: usize,
}

/// Accumulator carried through the line fold
#[derive(Default)]
struct ScanState<'a> {
    current_document: Option<&'a str>,
    warned: BTreeSet<&'a str>,
    lines_scanned: usize,
    headers_seen: usize,
    warning_lines: usize,
    unattributed_warnings: usize,
}

/// Scans log text for documents carrying missing-file warnings
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    decoration: HeaderDecoration,
    marker: String,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            decoration: HeaderDecoration::default(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl ReportGenerator {
    pub fn new(decoration: HeaderDecoration, marker: impl Into<String>) -> Self {
        Self {
            decoration,
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Scan log text in a single pass
    ///
    /// Lines are split on `\n` only. A header line updates the current
    /// document; any line containing the marker is attributed to the current
    /// document, if one has been seen.
    pub fn scan(&self, log_text: &str) -> ScanSummary {
        let state = log_text
            .split('\n')
            .fold(ScanState::default(), |mut state, line| {
                state.lines_scanned += 1;

                if let Some(path) = self.decoration.match_header(line) {
                    state.current_document = Some(path);
                    state.headers_seen += 1;
                }

                if line.contains(self.marker.as_str()) {
                    state.warning_lines += 1;
                    match state.current_document {
                        Some(document) => {
                            state.warned.insert(document);
                        }
                        None => state.unattributed_warnings += 1,
                    }
                }

                state
            });

        ScanSummary {
            documents: state.warned.into_iter().map(str::to_string).collect(),
            lines_scanned: state.lines_scanned,
            headers_seen: state.headers_seen,
            warning_lines: state.warning_lines,
            unattributed_warnings: state.unattributed_warnings,
        }
    }

    /// Sorted, deduplicated list of warned documents
    pub fn generate(&self, log_text: &str) -> Vec<String> {
        self.scan(log_text).documents
    }

    /// Read the log at `path` and scan it
    pub fn generate_from_file(&self, path: &Path) -> Result<ScanSummary, ReportError> {
        let log_text = read_log(path)?;
        let summary = self.scan(&log_text);

        tracing::debug!(
            lines = summary.lines_scanned,
            headers = summary.headers_seen,
            warnings = summary.warning_lines,
            documents = summary.documents.len(),
            "scanned {}",
            path.display()
        );
        if summary.unattributed_warnings > 0 {
            tracing::warn!(
                "{} {} line(s) appear before any document header and were not attributed",
                summary.unattributed_warnings,
                self.marker
            );
        }

        Ok(summary)
    }
}

/// Warned documents in `log_text` using the default decoration and marker
pub fn generate_report(log_text: &str) -> Vec<String> {
    ReportGenerator::default().generate(log_text)
}

/// Read and scan the log at `path` using the default decoration and marker
pub fn generate_report_from_file(path: &Path) -> Result<ScanSummary, ReportError> {
    ReportGenerator::default().generate_from_file(path)
}
