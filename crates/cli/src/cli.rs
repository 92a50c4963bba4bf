use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "runlet")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runlet {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a snippet against every supported language
    #[command(visible_alias = "d")]
    Detect {
        /// Path to the snippet file (reads stdin when omitted)
        filepath: Option<String>,

        /// Only show the N best matches
        #[arg(short, long)]
        top: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
    /// Compute syntax-highlighting spans for a snippet
    #[command(visible_alias = "hl")]
    Highlight {
        /// Path to the snippet file (reads stdin when omitted)
        filepath: Option<String>,

        /// Language to highlight as (auto-detected when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Emit JSON instead of a span listing
        #[arg(short, long)]
        json: bool,
    },
    /// Write a snippet to a temp file and run it in a terminal
    #[command(visible_alias = "r")]
    Run {
        /// Path to the snippet file (reads stdin when omitted)
        filepath: Option<String>,

        /// Language to run as (auto-detected when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Working directory for the temp file and the spawned terminal
        /// (defaults to the current directory)
        #[arg(long)]
        dir: Option<String>,

        /// Print the composed command without writing or spawning anything
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Initialize runlet configuration
    Init {
        /// Specify the directory to place the config in
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}
