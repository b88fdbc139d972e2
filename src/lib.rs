//! Missing-file Report Library
//!
//! Finds the documentation files that a validation log flags with
//! `missing-file` warnings.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::generator;
pub use crate::scanner::log_reader;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::error::ReportError;
    pub use crate::core::generator::{
        generate_report, generate_report_from_file, ReportGenerator, ScanSummary, DEFAULT_MARKER,
    };
    pub use crate::core::header::{HeaderDecoration, DEFAULT_HEADER_PREFIX, DEFAULT_HEADER_SUFFIX};
    pub use crate::scanner::log_reader::{read_log, DEFAULT_LOG_PATH};
    pub use crate::reporting::report_writer::{
        print_report, write_json_report, write_summary, DEFAULT_DISPLAY_LIMIT,
    };
}
