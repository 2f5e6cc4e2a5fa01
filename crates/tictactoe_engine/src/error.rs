//! Errors returned by the engine.

use crate::position::Position;
use crate::types::{Outcome, Player};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RuleError {
    /// The raw index is not in 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(i32),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),

    /// It's not this player's turn.
    #[display("It's {expected}'s turn, not {got}'s")]
    IllegalMove {
        /// Player whose turn it is.
        expected: Player,
        /// Player that attempted the move.
        got: Player,
    },

    /// The game already has an outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for RuleError {}

/// Error raised when turning untrusted input into engine types.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Text that names neither X nor O.
    #[display("Unknown player {:?} (expected X or O)", _0)]
    UnknownPlayer(String),

    /// Text that is neither an index nor a position label.
    #[display("Unknown position {:?}", _0)]
    UnknownPosition(String),

    /// Cells that no legal game could produce.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

impl std::error::Error for ParseError {}
