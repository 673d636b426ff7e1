//! Tic-Tac-Frenzy - console entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac_frenzy::{Cli, GameConfig, Session, TerminalConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the game screen on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config = config.with_rng_seed(cli.seed);
    }

    info!("starting session");

    let mut session = Session::new(TerminalConsole::new(), config);
    session.run().context("console session failed")
}
