pub mod confidence;
pub mod language;
pub mod span;

// Re-export commonly used types
pub use confidence::{ConfidenceLevel, ConfidenceRange, DetectionResult};
pub use language::Language;
pub use span::{HighlightSpan, TokenType};
