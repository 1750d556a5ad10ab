//! frenzy_sim - Headless replay driver for frenzy_core
//!
//! Runs a scripted event list through a player session and prints the
//! resulting log as JSON. Logs go to stderr (`RUST_LOG=debug` for detail).

use anyhow::{Context, Result};
use clap::Parser;
use frenzy_core::config::{default_constants, load_constants};
use frenzy_core::replay::{run_replay, ReplayScript};
use std::path::PathBuf;

/// Replay a scripted run against the rules engine
#[derive(Parser)]
#[command(name = "frenzy_sim")]
#[command(about = "Headless replay driver for the Elemental Frenzy rules engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Replay script (`.json` for JSON, anything else is read as TOML)
    script: PathBuf,

    /// Balance constants overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the output log
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let constants = match &cli.config {
        Some(path) => load_constants(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => default_constants(),
    };

    tracing::debug!(bindings = %constants.bindings.hint(), "key bindings");

    let script = ReplayScript::load(&cli.script)
        .with_context(|| format!("loading script {}", cli.script.display()))?;
    tracing::info!(
        events = script.events.len(),
        element = %script.player_element,
        "starting replay"
    );

    let log = run_replay(&script, &constants).context("running replay")?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&log)?
    } else {
        serde_json::to_string(&log)?
    };
    println!("{}", output);

    Ok(())
}
