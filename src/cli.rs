//! Command-line interface for tictac_frenzy.

use clap::Parser;

/// Tic-Tac-Frenzy - console connection game
#[derive(Parser, Debug)]
#[command(name = "tictac_frenzy")]
#[command(about = "Console connection game with Classic and Frenzy modes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, default_value = "tictac_frenzy.toml")]
    pub config: std::path::PathBuf,

    /// Fixed RNG seed for the opening-turn draw and bot fallback moves
    #[arg(long)]
    pub seed: Option<u64>,
}
