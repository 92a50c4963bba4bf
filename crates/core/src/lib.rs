//! runlet - classify, highlight, and run snippets of scripting languages
//!
//! This crate provides functionality to:
//! - Score a snippet of source text against a fixed set of scripting languages
//! - Annotate a snippet with non-overlapping syntax-highlighting spans
//! - Materialize a snippet as a temp file and launch it in an external terminal
pub mod config;
pub mod detect;
pub mod error;
pub mod exec;
pub mod highlight;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{Config, LanguageSettings};
pub use detect::{detect, detect_top, detect_top_n};
pub use exec::{ExecutionPipeline, ProcessLauncher, SystemLauncher, Terminal};
pub use highlight::{analyze, analyze_language};
