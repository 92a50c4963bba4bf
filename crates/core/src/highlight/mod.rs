//! Syntax highlighter: priority-ordered, non-overlapping span tokenizer

mod analyzer;
mod ranges;
mod rules;

pub use analyzer::{analyze, analyze_language};
