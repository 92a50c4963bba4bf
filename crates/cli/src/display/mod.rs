pub mod formatter;

pub use formatter::{format_detection_table, format_spans};
