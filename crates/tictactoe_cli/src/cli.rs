//! Command-line interface for the console front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or replay tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML presentation config
    #[arg(short, long, global = true, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive two-player game on stdin
    Play,

    /// Replay a list of board indices, alternating from X
    Replay {
        /// Comma-separated indices 0-8, e.g. 0,1,4,2,8
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        moves: Vec<i32>,
    },
}
