//! Error types for report generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a missing-file report
#[derive(Error, Debug)]
pub enum ReportError {
    /// The log could not be read: absent, unreadable, permission-denied or not UTF-8.
    #[error("log file {} is unavailable: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ReportError::ResourceUnavailable { path, .. } => path,
        }
    }
}
