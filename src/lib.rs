//! Tippy rules engine
//!
//! Tippy generalizes tic-tac-toe to an n x n board. Players take turns
//! marking empty squares, and the first to own an S or Z tetromino (a
//! "tippy", in any rotation) wins.
//!
//! # Architecture
//!
//! - **State**: immutable [`GameState`]; every move yields a new state
//! - **Rules**: pure detectors over a [`Board`] ([`has_tippy`], [`is_full`])
//! - **Contracts**: preconditions and debug-build postconditions on moves
//! - **Config**: [`TippyConfig`], loadable from TOML
//!
//! The engine performs no I/O. Drivers read input, build [`Move`]s and
//! pass them to [`GameState::apply_move`].
//!
//! # Example
//!
//! ```
//! use tippy::{GameState, Move, Player};
//!
//! # fn example() -> Result<(), tippy::TippyError> {
//! let game = GameState::new(4, Player::P1)?;
//! let game = game.apply_move(Move::new(1, 1))?;
//! assert_eq!(game.next_player(), Player::P2);
//! assert_eq!(game.possible_next_moves().len(), 15);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod games;

// Crate-level exports - Errors
pub use error::TippyError;

// Crate-level exports - Game abstraction
pub use games::TurnBasedGame;

// Crate-level exports - Game types (tippy)
pub use games::tippy::{
    AlternatingTurnInvariant, Board, ConfigError, Contract, DRAW, GameState, GameStatus,
    Invariant, InvariantSet, InvariantViolation, LOSE, LegalMove, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    Mark, Move, MoveContract, MoveError, OverConsistentInvariant, ParseMoveError, Player,
    SingleSquareInvariant, Square, TEMPLATES, Template, TippyConfig, TippyInvariants, Transition,
    WIN, has_near_tippy, has_tippy, is_full, template_cells,
};
