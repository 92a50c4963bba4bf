//! Process-launch boundary
//!
//! The pipeline never spawns directly; it goes through [`ProcessLauncher`] so
//! command composition stays testable without creating real processes.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Capability to start an external process with args and a working directory.
///
/// Implementations return as soon as the process has been started; nothing
/// awaits its completion.
pub trait ProcessLauncher {
    fn launch(&self, program: &str, args: &[String], working_dir: &Path) -> Result<()>;
}

/// Production launcher backed by `std::process::Command`
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String], working_dir: &Path) -> Result<()> {
        debug!("spawning {} with args {:?} in {:?}", program, args, working_dir);
        Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .spawn()
            .map_err(|source| Error::SpawnError {
                program: program.to_string(),
                source,
            })?;
        // The child is intentionally dropped without waiting: the terminal
        // owns the script's lifetime from here on
        Ok(())
    }
}
