//! Output formatting for analysis reports.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_error, format_result_line, format_size_report, format_warning};
