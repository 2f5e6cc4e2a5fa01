//! Console front end for the tic-tac-toe engine.
//!
//! Stands in for the web page: a header, one label per player, the board and
//! a footer link. All game rules live in [`tictactoe_engine`]; this crate
//! only reads input, calls the engine and prints what it returns.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PresentationConfig};
pub use render::{render_footer, render_header, render_player_labels, render_screen};
pub use session::{play, replay};
