//! First-class move type for Tippy.
//!
//! A move names a square and nothing else. Whose mark lands there is decided
//! by the state the move is applied to, and range checks happen there too.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move in Tippy: the square a player wishes to mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, new, Serialize, Deserialize,
)]
pub struct Move {
    /// Row, counted from 0 at the top.
    pub row: usize,
    /// Column, counted from 0 at the left.
    pub column: usize,
}

impl Move {
    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Insert letter at row {}, column {}", self.row, self.column)
    }
}

/// Parses `"row column"` or `"row,column"`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, column] => {
                let row = row.parse().map_err(|_| ParseMoveError::new(s))?;
                let column = column.parse().map_err(|_| ParseMoveError::new(s))?;
                Ok(Move::new(row, column))
            }
            _ => Err(ParseMoveError::new(s)),
        }
    }
}

/// Input that does not describe a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot parse move from {:?}: expected two non-negative integers", input)]
pub struct ParseMoveError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

impl ParseMoveError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is an illegal move: the state it was applied to is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move names a square off the board.
    #[display("Square ({}, {}) is outside the {}x{} board", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Board side length.
        size: usize,
    },

    /// The square is already marked.
    #[display("Square ({}, {}) is already occupied", _0.row(), _0.column())]
    SquareOccupied(#[error(not(source))] Move),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
