//! Alternating turn invariant: every move passes the turn.

use super::super::contracts::Transition;
use super::Invariant;

/// Invariant: the player to move after a move is the opponent of the mover.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingTurnInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        t.after.next_player() == t.before.next_player().opponent()
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
