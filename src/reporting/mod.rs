//! Report output

pub mod report_writer;

pub use report_writer::{print_report, write_json_report, write_summary, DEFAULT_DISPLAY_LIMIT};
