//! Single winner invariant.

use super::Invariant;
use crate::board::BoardState;
use crate::rules::has_line;
use crate::types::Player;

/// Invariant: X and O never both own a completed line.
pub struct SingleWinner;

impl Invariant<BoardState> for SingleWinner {
    fn holds(state: &BoardState) -> bool {
        !(has_line(state, Player::X) && has_line(state, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
