use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::impl_case_insensitive_deserialize;

/// The closed set of languages runlet can detect, highlight, and run
///
/// Variant order is the canonical enumeration order: it decides the order of
/// all-zero detection results and is the order rule tables are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Batch,
    Powershell,
    Bash,
    Go,
}

// Implement case-insensitive deserialization
impl_case_insensitive_deserialize!(
    Language,
    Python => "python",
    Javascript => "javascript",
    Batch => "batch",
    Powershell => "powershell",
    Bash => "bash",
    Go => "go"
);

impl Language {
    /// All supported languages, in enumeration order
    pub const ALL: [Language; 6] = [
        Language::Python,
        Language::Javascript,
        Language::Batch,
        Language::Powershell,
        Language::Bash,
        Language::Go,
    ];

    /// Canonical lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Batch => "batch",
            Language::Powershell => "powershell",
            Language::Bash => "bash",
            Language::Go => "go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses a language identifier, canonicalizing with lowercase + trim
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::Javascript),
            "batch" => Ok(Language::Batch),
            "powershell" => Ok(Language::Powershell),
            "bash" => Ok(Language::Bash),
            "go" => Ok(Language::Go),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}
