//! Tic-tac-toe console front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, Command, PresentationConfig, play, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = PresentationConfig::load(cli.config.as_deref())
        .context("Failed to load presentation config")?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = match cli.command {
        Command::Play => play(&config, io::stdin().lock(), &mut output)?,
        Command::Replay { moves } => replay(&config, &moves, &mut output)?,
    };

    info!(%outcome, "Done");
    Ok(())
}
