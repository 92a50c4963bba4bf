use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::exec::Terminal;
use crate::types::{ConfidenceRange, Language};

/// How to run one language: shell command and temp-file extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LanguageSettings {
    /// Command the script path is appended to, e.g. `python` or `go run`
    pub command: String,
    /// File extension with leading separator, e.g. `.py`
    pub extension: String,
}

impl LanguageSettings {
    fn new(command: &str, extension: &str) -> Self {
        Self {
            command: command.to_string(),
            extension: extension.to_string(),
        }
    }
}

/// Values the engines consume from the outside: per-language run settings,
/// temp-file prefix, confidence thresholds, and terminal choice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<Language, LanguageSettings>,

    #[serde(default = "default_temp_prefix")]
    pub temp_prefix: String,

    #[serde(default)]
    pub confidence: ConfidenceRange,

    #[serde(default)]
    pub terminal: Terminal,
}

fn default_temp_prefix() -> String {
    "runlet_snippet".to_string()
}

fn default_languages() -> BTreeMap<Language, LanguageSettings> {
    BTreeMap::from([
        (
            Language::Python,
            LanguageSettings::new("python", ".py"),
        ),
        (
            Language::Javascript,
            LanguageSettings::new("node", ".js"),
        ),
        (Language::Batch, LanguageSettings::new("call", ".bat")),
        (
            Language::Powershell,
            LanguageSettings::new("powershell -ExecutionPolicy Bypass -File", ".ps1"),
        ),
        (Language::Bash, LanguageSettings::new("bash", ".sh")),
        (Language::Go, LanguageSettings::new("go run", ".go")),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            temp_prefix: default_temp_prefix(),
            confidence: ConfidenceRange::default(),
            terminal: Terminal::default(),
        }
    }
}

impl Config {
    /// Run settings for `language`, or a config error if the loaded file
    /// dropped its entry
    pub fn language_settings(&self, language: Language) -> Result<&LanguageSettings> {
        self.languages.get(&language).ok_or_else(|| {
            Error::ConfigError(format!("no settings configured for language '{language}'"))
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".runlet.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("runlet.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Loads the nearest config file above `start_path`. Only a missing file
    /// falls back to the built-in defaults; a file that exists but fails to
    /// load is an error, so bad settings are never silently ignored.
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }
}
