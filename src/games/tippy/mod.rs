//! Tippy: an n x n marking game won by forming an S or Z tetromino.

mod action;
mod config;
mod contracts;
mod invariants;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError, ParseMoveError};
pub use config::{ConfigError, TippyConfig};
pub use contracts::{Contract, LegalMove, MoveContract, Transition};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, OverConsistentInvariant,
    SingleSquareInvariant, TippyInvariants,
};
pub use rules::{TEMPLATES, Template, has_near_tippy, has_tippy, is_full, template_cells};
pub use state::{DRAW, GameState, GameStatus, LOSE, WIN};
pub use types::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Player, Square};
