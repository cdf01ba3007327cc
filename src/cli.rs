//! Command-line interface for console_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player Tic-Tac-Toe on the console
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two-player tic-tac-toe played from the keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_welcome: bool,
}
