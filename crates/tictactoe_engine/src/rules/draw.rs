//! Draw detection logic for tic-tac-toe.

use crate::board::BoardState;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &BoardState) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
