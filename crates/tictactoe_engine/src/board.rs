//! Immutable board snapshot.

use crate::error::{ParseError, RuleError};
use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// All nine cells of a 3x3 board plus the player to move.
///
/// Values are never mutated in place; [`RuleEngine::apply_move`](crate::RuleEngine::apply_move)
/// returns a fresh `BoardState` for every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct BoardState {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Player to move next.
    turn: Player,
}

impl BoardState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            turn: Player::X,
        }
    }

    /// Builds a board from untrusted cells, deriving whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBoard`] when the cells could not arise
    /// from a legal game (mark counts out of balance, two winners, a mark
    /// placed after a win).
    #[instrument(skip(cells))]
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, ParseError> {
        let x = count_in(&cells, Player::X);
        let o = count_in(&cells, Player::O);
        let turn = if x > o { Player::O } else { Player::X };
        Self { cells, turn }.validated()
    }

    /// Returns the cell at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] when `position` is not in 0-8.
    pub fn cell_at(&self, position: i32) -> Result<Cell, RuleError> {
        let pos = Position::try_from(position)?;
        Ok(self.cell(pos))
    }

    /// Returns the cell at an already validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        count_in(&self.cells, player)
    }

    /// Number of occupied cells.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect()
    }

    /// Places `player` at `pos` and hands the turn over.
    ///
    /// Callers are responsible for checking legality first.
    pub(crate) fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(player);
        Self {
            cells,
            turn: player.opponent(),
        }
    }

    fn validated(self) -> Result<Self, ParseError> {
        BoardInvariants::check_all(&self)
            .map(|()| self)
            .map_err(|violations| {
                warn!(count = violations.len(), "Rejected board");
                ParseError::InvalidBoard(describe(&violations))
            })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

fn count_in(cells: &[Cell; 9], player: Player) -> usize {
    cells
        .iter()
        .filter(|c| **c == Cell::Occupied(player))
        .count()
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl std::fmt::Display for BoardState {
    /// Three rows such as `X|2|O`, empty squares shown by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Wire form checked against the invariants on the way in.
#[derive(Deserialize)]
struct RawBoard {
    cells: [Cell; 9],
    turn: Player,
}

impl TryFrom<RawBoard> for BoardState {
    type Error = ParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self {
            cells: raw.cells,
            turn: raw.turn,
        }
        .validated()
    }
}
