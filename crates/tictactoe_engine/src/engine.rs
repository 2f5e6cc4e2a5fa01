//! Stateless rule engine.

use crate::action::Move;
use crate::board::BoardState;
use crate::error::RuleError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{has_line, is_full};
use crate::types::{Outcome, Player};
use tracing::{debug, instrument, warn};

/// Validates moves and classifies boards.
///
/// Holds no state: every operation is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Places `player`'s mark at the raw index `position`, returning the next board.
    ///
    /// Checks run in order: range, turn, game over, occupancy. A wrong
    /// player is therefore always reported as [`RuleError::IllegalMove`],
    /// whatever the state of the target square.
    ///
    /// # Errors
    ///
    /// - [`RuleError::OutOfRange`] when `position` is not in 0-8.
    /// - [`RuleError::IllegalMove`] when `player` is not `state.turn()`.
    /// - [`RuleError::GameOver`] when the board already has an outcome.
    /// - [`RuleError::OccupiedCell`] when the square is taken.
    #[instrument(skip(state), fields(turn = %state.turn()))]
    pub fn apply_move(
        state: &BoardState,
        position: i32,
        player: Player,
    ) -> Result<BoardState, RuleError> {
        let pos = Position::try_from(position)?;
        Self::apply(state, Move::new(player, pos))
    }

    /// Applies an already positioned [`Move`].
    ///
    /// Same checks as [`RuleEngine::apply_move`] minus the range check.
    #[instrument(skip(state, action), fields(turn = %state.turn(), %action))]
    pub fn apply(state: &BoardState, action: Move) -> Result<BoardState, RuleError> {
        let Move { player, position } = action;

        if player != state.turn() {
            return Err(RuleError::IllegalMove {
                expected: state.turn(),
                got: player,
            });
        }

        let outcome = Self::status(state);
        if outcome.is_terminal() {
            return Err(RuleError::GameOver(outcome));
        }

        if !state.cell(position).is_empty() {
            return Err(RuleError::OccupiedCell(position));
        }

        let next = state.with_mark(position, player);

        if cfg!(debug_assertions)
            && let Err(violations) = BoardInvariants::check_all(&next)
        {
            warn!(?violations, "Board invariant violated after move");
            debug_assert!(false, "Board invariant violated after {}", action);
        }

        debug!(moves = next.moves_played(), "Move accepted");
        Ok(next)
    }

    /// Classifies a board.
    ///
    /// Only the player who made the last move (the opponent of
    /// `state.turn()`) can have just completed a line, so only that
    /// player's lines are checked.
    #[instrument(level = "trace", skip(state))]
    pub fn status(state: &BoardState) -> Outcome {
        let last_mover = state.turn().opponent();
        if has_line(state, last_mover) {
            Outcome::Win(last_mover)
        } else if is_full(state) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Positions [`RuleEngine::apply`] accepts for the player to move.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(state: &BoardState) -> Vec<Position> {
        if Self::status(state).is_terminal() {
            return Vec::new();
        }
        state.empty_positions()
    }

    /// Replays moves from a fresh board.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] naming the first rejected move.
    #[instrument(skip(moves), fields(len = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<BoardState, ReplayError> {
        let state = moves
            .iter()
            .enumerate()
            .try_fold(BoardState::new(), |state, (index, action)| {
                Self::apply(&state, *action).map_err(|source| ReplayError { index, source })
            })?;

        let outcome = Self::status(&state);
        if outcome.is_terminal() {
            debug!(%outcome, "Replay reached a terminal board");
        }
        Ok(state)
    }
}

/// A move rejected during [`RuleEngine::replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} rejected", index)]
pub struct ReplayError {
    /// Zero-based index of the rejected move.
    pub index: usize,
    /// Why the move was rejected.
    pub source: RuleError,
}
