//! Win detection logic for tic-tac-toe.

use crate::board::BoardState;
use crate::position::Position;
use crate::types::{Cell, Player};

/// The eight winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` owns all three cells of any line.
pub fn has_line(board: &BoardState, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.cell(*pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> BoardState {
        marks
            .iter()
            .fold(BoardState::new(), |b, (pos, player)| b.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = BoardState::new();
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert!(has_line(&board, Player::O));
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert!(!has_line(&board, Player::X));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Player::O)));
            assert!(has_line(&board, Player::O), "line {:?}", line);
        }
    }
}
