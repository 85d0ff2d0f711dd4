//! Near-tippy detection: a template's three leading cells held, its last cell open.

use super::super::{Board, Mark, Square};
use super::tippy::{TEMPLATES, template_cells};
use tracing::instrument;

/// Checks if `mark` holds the three leading cells of some template whose
/// last cell is empty.
///
/// Only the last template cell counts as the gap. A shape missing one of its
/// leading cells is not reported, even though one move would complete it.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_near_tippy(board: &Board, mark: Mark) -> bool {
    let target = Some(Square::Occupied(mark));
    (0..board.size())
        .flat_map(|row| (0..board.size()).map(move |column| (row, column)))
        .any(|(row, column)| {
            TEMPLATES.iter().any(|template| {
                template_cells(board, row, column, template).is_some_and(
                    |[first, second, third, last]| {
                        [first, second, third]
                            .iter()
                            .all(|&(r, c)| board.get(r, c) == target)
                            && board.get(last.0, last.1) == Some(Square::Empty)
                    },
                )
            })
        })
}

#[cfg(test)]
mod tests {
    use super::super::tippy::has_tippy;
    use super::*;

    #[test]
    fn test_open_end_detected() {
        let board: Board = "XX_\n_X_\n___".parse().unwrap();
        assert!(has_near_tippy(&board, Mark::X));
    }

    #[test]
    fn test_square_corner_open() {
        let board: Board = "XX_\nXX_\n___".parse().unwrap();
        assert!(has_near_tippy(&board, Mark::X));
    }

    #[test]
    fn test_gap_in_leading_cell_not_reported() {
        // (1, 1) completes an O tippy, but the gap is not a template's last cell.
        let board: Board = "OO_\nO_O\n___".parse().unwrap();
        assert!(!has_near_tippy(&board, Mark::O));
        assert!(has_tippy(&board.with_mark(1, 1, Mark::O), Mark::O));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(4).unwrap();
        assert!(!has_near_tippy(&board, Mark::X));
    }
}
