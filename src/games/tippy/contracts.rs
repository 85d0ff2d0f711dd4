//! Contract-based validation for Tippy moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TippyInvariants};
use super::state::GameState;
use derive_new::new;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, action, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

/// A single applied move: the state before, the move, and the state after.
#[derive(Debug, Clone, Copy, new)]
pub struct Transition<'a> {
    /// State the move was applied to.
    pub before: &'a GameState,
    /// The applied move.
    pub action: Move,
    /// Resulting state.
    pub after: &'a GameState,
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move must name a square on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let size = game.board().size();
        if mov.row >= size || mov.column >= size {
            Err(MoveError::OutOfBounds {
                row: mov.row,
                column: mov.column,
                size,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto a marked square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.row, mov.column) {
            Err(MoveError::SquareOccupied(*mov))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the move is one of the state's possible next moves.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Square is on the board
/// - Square is empty
///
/// Postconditions:
/// - Only the targeted square changed, and it now holds the mover's mark
/// - The turn passed to the opponent
/// - The over flag agrees with the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, action: &Move, after: &GameState) -> Result<(), MoveError> {
        TippyInvariants::check_all(&Transition::new(before, *action, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tippy::{Board, Player};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new(3, Player::P1).unwrap();
        assert!(MoveContract::pre(&game, &Move::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new(3, Player::P1)
            .unwrap()
            .apply_move(Move::new(1, 1))
            .unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &Move::new(1, 1)),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameState::new(3, Player::P1).unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &Move::new(0, 3)),
            Err(MoveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameState::new(3, Player::P1).unwrap();
        let action = Move::new(0, 2);
        let after = game.apply_move(action).unwrap();
        assert!(MoveContract::post(&game, &action, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameState::new(3, Player::P1).unwrap();
        let action = Move::new(0, 2);
        // Wrong square marked, and the turn did not pass.
        let board: Board = "X__\n___\n___".parse().unwrap();
        let after = GameState::from_board(Player::P1, board);
        let result = MoveContract::post(&game, &action, &after);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
    }
}
