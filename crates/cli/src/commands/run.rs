use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use runlet_core::{Config, ConfidenceLevel, ExecutionPipeline, detect_top};

use crate::utils::read_snippet;

pub fn run_command(
    filepath: Option<&str>,
    language: Option<&str>,
    dir: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let code = read_snippet(filepath)?;
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::load_or_default(&cwd).context("Failed to load config")?;

    let working_dir = match dir {
        Some(dir) => PathBuf::from(dir),
        None => cwd,
    };
    debug!("working directory: {}", working_dir.display());

    let language = match language {
        Some(language) => language.to_string(),
        None => {
            let top = detect_top(&code);
            if config.confidence.classify(top.confidence) == ConfidenceLevel::Low {
                bail!(
                    "not confident enough to run: best guess is {} at {:.2}; pass --language",
                    top.language,
                    top.confidence
                );
            }
            info!(
                "auto-detected language: {} ({:.2})",
                top.language, top.confidence
            );
            top.language.to_string()
        }
    };

    let pipeline = ExecutionPipeline::new(config);

    if dry_run {
        let command = pipeline.composed_command(&code, &language, &working_dir)?;
        println!("{command}");
        println!("Working directory: {}", working_dir.display());
    } else {
        pipeline
            .execute(&code, &language, &working_dir)
            .with_context(|| format!("Failed to run snippet as {language}"))?;
        info!("terminal launched; script output and cleanup are owned by it");
    }

    Ok(())
}
