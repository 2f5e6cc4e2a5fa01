//! No moves after a win: the winner's mark is always the last one placed.

use super::Invariant;
use crate::board::BoardState;
use crate::rules::has_line;
use crate::types::Player;

/// Invariant: a completed line belongs to the player who moved last.
///
/// X moves last when it leads O by one mark, O when the counts are equal.
pub struct NoMovesAfterWin;

impl Invariant<BoardState> for NoMovesAfterWin {
    fn holds(state: &BoardState) -> bool {
        let x = state.count(Player::X);
        let o = state.count(Player::O);
        (!has_line(state, Player::X) || x == o + 1) && (!has_line(state, Player::O) || x == o)
    }

    fn description() -> &'static str {
        "No mark is placed after a player completes a line"
    }
}
