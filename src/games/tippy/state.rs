//! Immutable game state for Tippy.
//!
//! A [`GameState`] never changes after construction. Applying a move builds a
//! new state around a copy of the board, so states can be shared freely, for
//! example between the branches of a game-tree search.

use super::action::{Move, MoveError};
use super::config::ConfigError;
use super::contracts::{Contract, MoveContract};
use super::rules::{has_near_tippy, has_tippy, is_full};
use super::types::{Board, Player};
use crate::error::TippyError;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Outcome value of a won game, from the next player's point of view.
pub const WIN: f64 = 1.0;
/// Outcome value of a lost game, from the next player's point of view.
pub const LOSE: f64 = -1.0;
/// Outcome value of a drawn or undecided game.
pub const DRAW: f64 = 0.0;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player holds a tippy.
    Won(Player),
    /// Board is full and nobody holds a tippy.
    Draw,
}

/// Complete game state: the board, who moves next, and whether it is over.
///
/// `is_over` is computed once from the board when the state is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    next_player: Player,
    over: bool,
}

impl GameState {
    /// Creates a fresh game on an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is below the minimum board size.
    #[instrument]
    pub fn new(size: usize, next_player: Player) -> Result<Self, ConfigError> {
        Ok(Self::from_board(next_player, Board::new(size)?))
    }

    /// Creates a state from an existing position.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_board(next_player: Player, board: Board) -> Self {
        let over = Player::iter().any(|p| has_tippy(&board, p.mark()));
        Self {
            board,
            next_player,
            over,
        }
    }

    /// Replays `moves` from a fresh board, alternating players from `first_player`.
    ///
    /// Stops at the first illegal move and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: usize, first_player: Player, moves: &[Move]) -> Result<Self, TippyError> {
        let mut state = Self::new(size, first_player)?;
        for action in moves {
            state = state.apply_move(*action)?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns whether either mark forms a tippy.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Lists every empty square as a move, in row-major order.
    ///
    /// Empty once the game is over. An empty list does not by itself tell a
    /// full board from a won one; check [`GameState::is_over`].
    #[instrument(skip(self))]
    pub fn possible_next_moves(&self) -> Vec<Move> {
        if self.over {
            return Vec::new();
        }
        let n = self.board.size();
        (0..n)
            .flat_map(|row| (0..n).map(move |column| Move::new(row, column)))
            .filter(|m| self.board.is_empty(m.row, m.column))
            .collect()
    }

    /// Returns the state reached by the next player marking `action`'s square.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is off the board, the square is
    /// taken, or the game is over. `self` is untouched either way.
    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn apply_move(&self, action: Move) -> Result<Self, MoveError> {
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Illegal move rejected");
            return Err(e);
        }

        let mark = self.next_player.mark();
        let after = Self::from_board(
            self.next_player.opponent(),
            self.board.with_mark(action.row, action.column, mark),
        );

        #[cfg(debug_assertions)]
        MoveContract::post(self, &action, &after)?;

        debug!(%action, over = after.over, "Move applied");
        Ok(after)
    }

    /// Checks whether `player`'s mark forms a tippy.
    ///
    /// Meant for finished games; the opponent's shapes do not count.
    #[instrument(skip(self))]
    pub fn winner(&self, player: Player) -> bool {
        has_tippy(&self.board, player.mark())
    }

    /// Classifies the position.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(player) = Player::iter().find(|p| self.winner(*p)) {
            GameStatus::Won(player)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Estimates the outcome for the next player without searching.
    ///
    /// [`WIN`] if they already hold a tippy or hold the three leading cells
    /// of a template whose last cell is empty ([`has_near_tippy`]), [`LOSE`]
    /// if the opponent holds a tippy, [`DRAW`] otherwise. Other one-move
    /// finishes are not seen.
    #[instrument(skip(self))]
    pub fn rough_outcome(&self) -> f64 {
        let me = self.next_player;
        if self.winner(me) {
            WIN
        } else if self.winner(me.opponent()) {
            LOSE
        } else if !is_full(&self.board) && has_near_tippy(&self.board, me.mark()) {
            WIN
        } else {
            DRAW
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}next player: {}", self.board, self.next_player)
    }
}
