//! Over flag invariant: the stored game-over flag matches the board.

use super::super::contracts::Transition;
use super::super::rules::has_tippy;
use super::super::Mark;
use super::Invariant;

/// Invariant: the resulting state is over iff either mark forms a tippy.
pub struct OverConsistentInvariant;

impl<'a> Invariant<Transition<'a>> for OverConsistentInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let board = t.after.board();
        t.after.is_over() == (has_tippy(board, Mark::X) || has_tippy(board, Mark::O))
    }

    fn description() -> &'static str {
        "Game is over exactly when a tippy is on the board"
    }
}
