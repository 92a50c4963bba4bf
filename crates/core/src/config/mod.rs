//! Configuration management for runlet

mod settings;

// Re-export main types
pub use settings::{Config, LanguageSettings};
