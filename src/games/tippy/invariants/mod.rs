//! First-class invariants for Tippy move transitions.
//!
//! Invariants are logical properties that every applied move must preserve.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod over_consistent;
pub mod single_square;

pub use alternating_turn::AlternatingTurnInvariant;
pub use over_consistent::OverConsistentInvariant;
pub use single_square::SingleSquareInvariant;

/// All Tippy transition invariants as a composable set.
pub type TippyInvariants = (
    SingleSquareInvariant,
    AlternatingTurnInvariant,
    OverConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::super::contracts::Transition;
    use super::*;
    use crate::games::tippy::{Board, GameState, Move, Player};

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)];
        let mut game = GameState::new(3, Player::P1).unwrap();
        for action in moves {
            let after = game.apply_move(action).unwrap();
            assert!(TippyInvariants::check_all(&Transition::new(&game, action, &after)).is_ok());
            game = after;
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let game = GameState::new(3, Player::P1).unwrap();
        let board: Board = "_O_\n___\n___".parse().unwrap();
        let after = GameState::from_board(Player::P1, board);
        let violations =
            TippyInvariants::check_all(&Transition::new(&game, Move::new(0, 0), &after))
                .unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new(3, Player::P1).unwrap();
        let action = Move::new(1, 1);
        let after = game.apply_move(action).unwrap();

        type TwoInvariants = (SingleSquareInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&Transition::new(&game, action, &after)).is_ok());
    }
}
