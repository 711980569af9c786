use anyhow::Result;
use clap::Parser;

use scene_harness::cli::Cli;
use scene_harness::config::HarnessConfig;
use scene_harness::fs::File;
use scene_harness::harness;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = HarnessConfig::load(&File::new(&cli.config))?;
    let summaries = harness::run(&config)?;

    for summary in &summaries {
        summary.print_summary();
    }

    if let Some(dir) = cli.output.or(config.output_dir) {
        harness::write_summaries(&File::new(dir), &summaries)?;
    }

    Ok(())
}
