// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-harness")]
#[command(about = "Drive test scenes through their states", long_about = None)]
pub struct Cli {
    /// Harness configuration (JSON)
    pub config: PathBuf,

    /// Directory for per-scene summaries, overrides the configuration
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}
