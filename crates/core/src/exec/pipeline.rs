//! Script execution pipeline: temp file, command composition, process launch

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use super::launcher::{ProcessLauncher, SystemLauncher};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::Language;

/// Orchestrates temp-file creation, command assembly, and terminal launch.
///
/// Fire-and-forget: `execute` returns once the terminal process has been
/// started. The spawned terminal owns the script's output and the temp
/// file's deletion; the pipeline has no further visibility into either.
pub struct ExecutionPipeline {
    config: Config,
    launcher: Box<dyn ProcessLauncher>,
}

impl ExecutionPipeline {
    pub fn new(config: Config) -> Self {
        Self::with_launcher(config, Box::new(SystemLauncher))
    }

    /// Substitutes the process-launch boundary, for tests and embedders
    pub fn with_launcher(config: Config, launcher: Box<dyn ProcessLauncher>) -> Self {
        Self { config, launcher }
    }

    /// Writes `code` to a temp script file in `working_dir` and launches it
    /// in the configured terminal.
    ///
    /// Preconditions are validated in order before any side effect: `code`
    /// non-empty, `language` a supported identifier, `working_dir` an
    /// existing directory. Write failures and spawn failures surface as
    /// distinct errors; nothing is retried.
    pub fn execute(&self, code: &str, language: &str, working_dir: &Path) -> Result<()> {
        let language = self.validate(code, language, working_dir)?;
        let settings = self.config.language_settings(language)?;

        let file_name = format!("{}{}", self.config.temp_prefix, settings.extension);
        let script_path = working_dir.join(&file_name);
        fs::write(&script_path, code).map_err(|source| Error::WriteError {
            path: script_path.clone(),
            source,
        })?;
        debug!("wrote {} bytes to {:?}", code.len(), script_path);

        let command = self.compose(language, &script_path)?;
        let terminal = self.config.terminal;
        info!("launching {} with: {}", terminal, command);

        self.launcher.launch(
            terminal.program(),
            &terminal.invocation_args(&command),
            working_dir,
        )
    }

    /// The composed run/pause/cleanup command `execute` would launch, without
    /// touching the filesystem or spawning anything
    pub fn composed_command(
        &self,
        code: &str,
        language: &str,
        working_dir: &Path,
    ) -> Result<String> {
        let language = self.validate(code, language, working_dir)?;
        let settings = self.config.language_settings(language)?;
        let file_name = format!("{}{}", self.config.temp_prefix, settings.extension);
        self.compose(language, &working_dir.join(file_name))
    }

    fn validate(&self, code: &str, language: &str, working_dir: &Path) -> Result<Language> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".to_string()));
        }
        if language.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "language must not be blank".to_string(),
            ));
        }
        let language = Language::from_str(language)?;
        if working_dir.as_os_str().is_empty() {
            return Err(Error::InvalidArgument(
                "working directory must not be blank".to_string(),
            ));
        }
        if !working_dir.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "working directory does not exist: {}",
                working_dir.display()
            )));
        }
        Ok(language)
    }

    fn compose(&self, language: Language, script_path: &Path) -> Result<String> {
        let settings = self.config.language_settings(language)?;
        let path = script_path.display().to_string();
        let run = format!("{} \"{}\"", settings.command, path);
        let cleanup = self.config.terminal.delete_command(&path);
        Ok(self.config.terminal.compose(&run, &cleanup))
    }
}
