//! Replays a JSON gesture script against a grid and prints the selections.

use anyhow::{Context, Result};
use clap::Parser;
use slotgrid::replay::{self, Script};
use slotgrid::{GridSettings, logging};
use std::path::PathBuf;

/// Replay a gesture script and print the resulting selections as JSON.
#[derive(Parser)]
#[command(name = "slotgrid-replay", version, about)]
struct Cli {
    /// Path to the JSON gesture script.
    script: PathBuf,

    /// Settings file to use instead of the platform default.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => GridSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => GridSettings::load(),
    };
    logging::init(cli.log_level.as_deref().unwrap_or(&settings.log_level));

    let script = Script::load(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    let report = replay::run(&script, settings).context("replaying script")?;

    let json = serde_json::to_string_pretty(&report.selections)?;
    println!("{json}");
    Ok(())
}
