//! Language detection engine: tiered confidence scoring

mod detector;
mod rules;

pub use detector::{detect, detect_top, detect_top_n};
