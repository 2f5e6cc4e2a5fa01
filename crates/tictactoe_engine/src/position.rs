//! Named squares of the board.

use crate::error::{ParseError, RuleError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board, row-major 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the square, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the square, 0 at the left.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }
}

impl TryFrom<i32> for Position {
    type Error = RuleError;

    #[instrument(level = "trace")]
    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Position::from_index)
            .ok_or(RuleError::OutOfRange(index))
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses an index (`"4"`) or a label (`"center"`, `"top left"`, `"Bottom-right"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<usize>() {
            return Position::from_index(num)
                .ok_or_else(|| ParseError::UnknownPosition(trimmed.to_string()));
        }

        let wanted = normalize(trimmed);
        Position::ALL
            .into_iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(|| ParseError::UnknownPosition(trimmed.to_string()))
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_on_all() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from(-1), Err(RuleError::OutOfRange(-1)));
        assert_eq!(Position::try_from(9), Err(RuleError::OutOfRange(9)));
        assert_eq!(Position::try_from(8), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("center".parse::<Position>(), Ok(Position::Center));
        assert_eq!("top left".parse::<Position>(), Ok(Position::TopLeft));
        assert_eq!("Bottom-Right".parse::<Position>(), Ok(Position::BottomRight));
        assert_eq!("7".parse::<Position>(), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("12".parse::<Position>().is_err());
        assert!("corner".parse::<Position>().is_err());
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
    }
}
