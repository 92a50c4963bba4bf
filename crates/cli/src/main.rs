use anyhow::Result;
use clap::Parser;

use runlet::cli::{Commands, Runlet};
use runlet::commands::{detect_command, highlight_command, init_command, run_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Runlet::parse();
    match cli.command {
        Commands::Detect {
            filepath,
            top,
            json,
        } => detect_command(filepath.as_deref(), top, json),
        Commands::Highlight {
            filepath,
            language,
            json,
        } => highlight_command(filepath.as_deref(), language.as_deref(), json),
        Commands::Run {
            filepath,
            language,
            dir,
            dry_run,
        } => run_command(filepath.as_deref(), language.as_deref(), dir.as_deref(), dry_run),
        Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
    }
}
