//! Console Tic-Tac-Toe - two players at one keyboard.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console_tictactoe::{GameConfig, Session, logging};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // The filter lives in the config, so the subscriber comes up after loading it.
    logging::init(config.log_filter());
    info!(path = ?cli.config, ?config, "Configuration loaded");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(stdin, stdout, config);
    let reason = session.run()?;

    info!(?reason, "Exiting");
    Ok(())
}

/// Reads the config file, if any, then applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    if cli.no_welcome {
        config = config.with_welcome(false);
    }

    Ok(config)
}
