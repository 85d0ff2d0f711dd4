//! Game implementations.
//!
//! Every game exposes the same turn-based surface through [`TurnBasedGame`].
//! The trait is sealed: Tippy is the only implementation.

pub mod tippy;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::tippy::GameState {}
}

/// A two-player, turn-based game state with immutable transitions.
///
/// Strategies and drivers program against this trait rather than a concrete
/// game.
pub trait TurnBasedGame: sealed::Sealed + Sized {
    /// Move type accepted by [`TurnBasedGame::apply_move`].
    type Move;
    /// Player identity.
    type Player;
    /// Rejection returned for illegal moves.
    type Error: std::error::Error;

    /// Player to move next.
    fn next_player(&self) -> Self::Player;

    /// Whether the game has ended with a winner.
    fn is_over(&self) -> bool;

    /// Legal moves from this state.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// State reached by applying `action`, leaving `self` unchanged.
    fn apply_move(&self, action: Self::Move) -> Result<Self, Self::Error>;

    /// Whether `player` has won.
    fn winner(&self, player: Self::Player) -> bool;
}

impl TurnBasedGame for tippy::GameState {
    type Move = tippy::Move;
    type Player = tippy::Player;
    type Error = tippy::MoveError;

    fn next_player(&self) -> Self::Player {
        tippy::GameState::next_player(self)
    }

    fn is_over(&self) -> bool {
        tippy::GameState::is_over(self)
    }

    fn possible_next_moves(&self) -> Vec<Self::Move> {
        tippy::GameState::possible_next_moves(self)
    }

    fn apply_move(&self, action: Self::Move) -> Result<Self, Self::Error> {
        tippy::GameState::apply_move(self, action)
    }

    fn winner(&self, player: Self::Player) -> bool {
        tippy::GameState::winner(self, player)
    }
}
