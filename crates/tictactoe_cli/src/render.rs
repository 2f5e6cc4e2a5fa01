//! Text rendering of the page around the board.

use crate::config::PresentationConfig;
use tictactoe_engine::{BoardState, Outcome, Player, RuleEngine};

/// Header line plus an underline of the same width.
pub fn render_header(config: &PresentationConfig) -> String {
    let title = config.title();
    format!("{}\n{}", title, "=".repeat(title.chars().count()))
}

/// One line per player, marking whose turn it is while the game runs.
pub fn render_player_labels(state: &BoardState) -> String {
    let in_progress = RuleEngine::status(state) == Outcome::InProgress;
    [Player::X, Player::O]
        .into_iter()
        .map(|player| {
            if in_progress && state.turn() == player {
                format!("Player {}  <- to move", player)
            } else {
                format!("Player {}", player)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Footer line with the configured link.
pub fn render_footer(config: &PresentationConfig) -> String {
    format!("Learn more: {}", config.footer_link())
}

/// Header, labels (when enabled) and board, separated by blank lines.
pub fn render_screen(config: &PresentationConfig, state: &BoardState) -> String {
    let mut sections = vec![render_header(config)];
    if *config.show_labels() {
        sections.push(render_player_labels(state));
    }
    sections.push(state.to_string());
    sections.join("\n\n")
}
