//! Core domain types for Tippy.

use super::config::ConfigError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Smallest board size on which a tippy fits.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 4096;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// First player, marks with X.
    #[display("p1")]
    #[serde(rename = "p1")]
    P1,
    /// Second player, marks with O.
    #[display("p2")]
    #[serde(rename = "p2")]
    P2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::P1 => Mark::X,
            Player::P2 => Mark::O,
        }
    }
}

/// Symbol a player leaves on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Placed by [`Player::P1`].
    #[display("X")]
    X,
    /// Placed by [`Player::P2`].
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the player who places this mark.
    pub fn owner(self) -> Player {
        match self {
            Mark::X => Player::P1,
            Mark::O => Player::P2,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Single-character symbol: `_`, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }

    /// Parses a square from its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Square::Empty),
            'X' => Some(Square::Occupied(Mark::X)),
            'O' => Some(Square::Occupied(Mark::O)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Square n x n board, squares stored in row-major order.
///
/// The size is fixed at construction. Boards are never edited in place by the
/// game: [`Board::with_mark`] returns a fresh copy with one square changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let len = check_size(size)?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; len],
        })
    }

    /// Builds a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the rows are not square or the board is
    /// smaller than [`MIN_BOARD_SIZE`].
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Square>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board has {} rows, at least {} required",
                size, MIN_BOARD_SIZE
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(ConfigError::new(format!(
                "Board is not square: row {} has {} squares, expected {}",
                index,
                row.len(),
                size
            )));
        }
        Ok(Self {
            size,
            squares: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at `(row, column)`, or `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<Square> {
        self.index(row, column).map(|i| self.squares[i])
    }

    /// Checks if `(row, column)` is on the board and empty.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        matches!(self.get(row, column), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns a copy of this board with `mark` placed at `(row, column)`.
    ///
    /// Out-of-range coordinates yield an unchanged copy; callers validate
    /// coordinates first.
    pub fn with_mark(&self, row: usize, column: usize, mark: Mark) -> Self {
        let mut next = self.clone();
        if let Some(i) = self.index(row, column) {
            next.squares[i] = Square::Occupied(mark);
        }
        next
    }

    /// Returns this board turned by 180 degrees.
    pub fn rotated_half_turn(&self) -> Self {
        Self {
            size: self.size,
            squares: self.squares.iter().rev().copied().collect(),
        }
    }

    /// Returns this board turned a quarter turn clockwise.
    pub fn rotated_quarter_turn(&self) -> Self {
        let n = self.size;
        let squares = (0..n)
            .flat_map(|row| (0..n).map(move |column| (row, column)))
            .map(|(row, column)| self.squares[(n - 1 - column) * n + row])
            .collect();
        Self { size: n, squares }
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.size && column < self.size).then(|| row * self.size + column)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let symbols: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Parses rows of symbols, one row per non-blank line.
///
/// Whitespace between symbols is optional, so `"X X _"` and `"XX_"` describe
/// the same row.
impl FromStr for Board {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

/// Validates a board side length and returns the number of squares.
pub(super) fn check_size(size: usize) -> Result<usize, ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size {} is below the minimum of {}",
            size, MIN_BOARD_SIZE
        )));
    }
    match size.checked_mul(size) {
        Some(len) if size <= MAX_BOARD_SIZE => Ok(len),
        _ => Err(ConfigError::new(format!(
            "Board size {} is above the maximum of {}",
            size, MAX_BOARD_SIZE
        ))),
    }
}

fn parse_row(line: &str) -> Result<Vec<Square>, ConfigError> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Square::from_symbol(c)
                .ok_or_else(|| ConfigError::new(format!("Unknown square symbol {:?}", c)))
        })
        .collect()
}

impl TryFrom<Vec<String>> for Board {
    type Error = ConfigError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let rows = rows
            .iter()
            .map(String::as_str)
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board
            .rows()
            .map(|row| row.iter().map(|s| s.symbol()).collect())
            .collect()
    }
}
