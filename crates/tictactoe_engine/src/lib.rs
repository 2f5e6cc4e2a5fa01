//! Tic-tac-toe game-state engine.
//!
//! The engine is split into an immutable [`BoardState`] value and a stateless
//! [`RuleEngine`] that validates moves and classifies positions.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{BoardState, Outcome, Player, RuleEngine};
//!
//! let state = BoardState::new();
//! let state = RuleEngine::apply_move(&state, 4, Player::X)?;
//! assert_eq!(state.turn(), Player::O);
//! assert_eq!(RuleEngine::status(&state), Outcome::InProgress);
//! # Ok::<(), tictactoe_engine::RuleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use board::BoardState;
pub use engine::{ReplayError, RuleEngine};
pub use error::{ParseError, RuleError};
pub use invariants::{
    BalancedMarks, BoardInvariants, Invariant, InvariantSet, InvariantViolation, NoMovesAfterWin,
    SingleWinner, TurnMatchesMarks,
};
pub use position::Position;
pub use rules::{LINES, has_line, is_full};
pub use types::{Cell, Outcome, Player};
