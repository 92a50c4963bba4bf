use anyhow::Result;
use tracing::{debug, info};

use runlet_core::{analyze, detect_top};

use crate::display::format_spans;
use crate::utils::read_snippet;

pub fn highlight_command(
    filepath: Option<&str>,
    language: Option<&str>,
    json: bool,
) -> Result<()> {
    let code = read_snippet(filepath)?;

    let language = match language {
        Some(language) => language.to_string(),
        None => {
            let top = detect_top(&code);
            info!(
                "auto-detected language: {} ({:.2})",
                top.language, top.confidence
            );
            top.language.to_string()
        }
    };

    let spans = analyze(&code, &language);
    debug!("{} spans for language {}", spans.len(), language);

    if json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        print!("{}", format_spans(&code, &spans));
    }

    Ok(())
}
