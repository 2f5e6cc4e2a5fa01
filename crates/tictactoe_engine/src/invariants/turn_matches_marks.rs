//! Turn invariant: whose move it is follows from the mark counts.

use super::Invariant;
use crate::board::BoardState;
use crate::types::Player;

/// Invariant: X is to move exactly when both players have the same number of marks.
pub struct TurnMatchesMarks;

impl Invariant<BoardState> for TurnMatchesMarks {
    fn holds(state: &BoardState) -> bool {
        let expected = if state.count(Player::X) == state.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
