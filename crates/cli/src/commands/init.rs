use std::path::PathBuf;

use anyhow::{Context, Result};

use runlet_core::Config;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let target_dir = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = target_dir.join(".runlet.json");
    if config_path.exists() && !force {
        println!("Config already exists at: {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {}", config_path.display());

    Ok(())
}
