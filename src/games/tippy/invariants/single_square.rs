//! Single square invariant: a move changes exactly one square.

use super::super::contracts::Transition;
use super::super::Square;
use super::Invariant;

/// Invariant: only the moved-to square changed, from empty to the mover's mark.
///
/// Marks are never overwritten or removed, so boards only ever fill up.
pub struct SingleSquareInvariant;

impl<'a> Invariant<Transition<'a>> for SingleSquareInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let before = t.before.board();
        let after = t.after.board();
        if before.size() != after.size() {
            return false;
        }
        let n = before.size();
        let target = t.action.row * n + t.action.column;
        let placed = Square::Occupied(t.before.next_player().mark());

        before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .all(|(i, (old, new))| {
                if i == target {
                    *old == Square::Empty && *new == placed
                } else {
                    old == new
                }
            })
    }

    fn description() -> &'static str {
        "Exactly the moved-to square changed, from empty to the mover's mark"
    }
}
