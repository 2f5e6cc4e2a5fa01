//! Balanced marks invariant: X leads O by zero or one.

use super::Invariant;
use crate::board::BoardState;
use crate::types::Player;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarks;

impl Invariant<BoardState> for BalancedMarks {
    fn holds(state: &BoardState) -> bool {
        let x = state.count(Player::X);
        let o = state.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
