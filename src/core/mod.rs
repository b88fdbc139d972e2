//! Log scanning and report generation

pub mod error;
pub mod generator;
pub mod header;

pub use error::ReportError;
pub use generator::{generate_report, generate_report_from_file, ReportGenerator, ScanSummary};
pub use header::HeaderDecoration;
