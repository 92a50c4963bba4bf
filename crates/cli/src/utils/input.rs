use std::io::Read;

use anyhow::{Context, Result};

/// Reads the snippet to operate on: from a file when a path was given,
/// otherwise from stdin
pub fn read_snippet(filepath: Option<&str>) -> Result<String> {
    match filepath {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet from {path}")),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read snippet from stdin")?;
            Ok(code)
        }
    }
}
