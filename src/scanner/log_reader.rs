//! Validation log loading

use std::fs;
use std::path::Path;

use crate::core::error::ReportError;

/// Log written by the documentation validator
pub const DEFAULT_LOG_PATH: &str = "docs_validate_clean.log";

/// Read the whole log into memory
///
/// The file handle is closed before this returns, on success or failure.
/// Line endings are normalized: `\r\n` and lone `\r` both become `\n`.
///
/// # Arguments
/// * `path` - Path to the log file
///
/// # Returns
/// The log text, or `ResourceUnavailable` if it cannot be read as UTF-8
pub fn read_log(path: &Path) -> Result<String, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(bytes = text.len(), "read log {}", path.display());
    Ok(normalize_newlines(text))
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
