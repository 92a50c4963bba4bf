use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use runlet_core::{Config, ConfidenceLevel, DetectionResult, detect, detect_top_n};

use crate::display::format_detection_table;
use crate::utils::read_snippet;

#[derive(Serialize)]
struct DetectionReport {
    language: String,
    confidence: f64,
    level: ConfidenceLevel,
}

pub fn detect_command(filepath: Option<&str>, top: Option<usize>, json: bool) -> Result<()> {
    let code = read_snippet(filepath)?;
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::load_or_default(&cwd).context("Failed to load config")?;

    debug!("detecting language for {} bytes of input", code.len());
    let results: Vec<DetectionResult> = match top {
        Some(n) => detect_top_n(&code, n)?,
        None => detect(&code),
    };

    let classified: Vec<(DetectionResult, ConfidenceLevel)> = results
        .iter()
        .map(|r| (*r, config.confidence.classify(r.confidence)))
        .collect();

    if json {
        let reports: Vec<DetectionReport> = classified
            .iter()
            .map(|(result, level)| DetectionReport {
                language: result.language.to_string(),
                confidence: result.confidence,
                level: *level,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", format_detection_table(&classified));
    }

    Ok(())
}
