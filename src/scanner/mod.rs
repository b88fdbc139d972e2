//! Validation log input

pub mod log_reader;

pub use log_reader::{read_log, DEFAULT_LOG_PATH};
