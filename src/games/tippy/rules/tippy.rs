//! Tippy detection: scanning the board for an S or Z tetromino of one mark.

use super::super::{Board, Mark, Square};
use tracing::{debug, instrument};

/// Offsets of the four cells of a tetromino, relative to the anchor square.
///
/// The anchor is always the first offset, `(0, 0)`.
pub type Template = [(isize, isize); 4];

/// The four rotations of the S/Z tetromino.
///
/// No template is a translation of another, so every one must be tried.
pub const TEMPLATES: [Template; 4] = [
    // Vertical, leaning left:
    //  . X
    //  X X
    //  X .
    [(0, 0), (1, 0), (1, -1), (2, -1)],
    // Vertical, leaning right:
    //  X .
    //  X X
    //  . X
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    // Horizontal, rising:
    //  . X X
    //  X X .
    [(0, 0), (0, 1), (-1, 1), (-1, 2)],
    // Horizontal, falling:
    //  X X .
    //  . X X
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

/// Resolves a template anchored at `(row, column)` to board coordinates.
///
/// Returns `None` if any cell would fall off the board.
pub fn template_cells(
    board: &Board,
    row: usize,
    column: usize,
    template: &Template,
) -> Option<[(usize, usize); 4]> {
    let mut cells = [(0, 0); 4];
    for (cell, (dr, dc)) in cells.iter_mut().zip(template) {
        let r = row.checked_add_signed(*dr)?;
        let c = column.checked_add_signed(*dc)?;
        if r >= board.size() || c >= board.size() {
            return None;
        }
        *cell = (r, c);
    }
    Some(cells)
}

/// Checks if `mark` forms a tippy anywhere on the board.
///
/// Anchors are scanned in row-major order and the first match wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_tippy(board: &Board, mark: Mark) -> bool {
    let target = Some(Square::Occupied(mark));
    for row in 0..board.size() {
        for column in 0..board.size() {
            if board.get(row, column) != target {
                continue;
            }
            for template in &TEMPLATES {
                let Some(cells) = template_cells(board, row, column, template) else {
                    continue;
                };
                if cells.iter().all(|&(r, c)| board.get(r, c) == target) {
                    debug!(row, column, ?cells, "Tippy found");
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn test_empty_board_has_no_tippy() {
        let board = Board::new(5).unwrap();
        assert!(!has_tippy(&board, Mark::X));
        assert!(!has_tippy(&board, Mark::O));
    }

    #[test]
    fn test_each_template_detected() {
        let cases = [
            "_X_\nXX_\nX__",
            "X__\nXX_\n_X_",
            "_XX\nXX_\n___",
            "XX_\n_XX\n___",
        ];
        for rows in cases {
            assert!(has_tippy(&board(rows), Mark::X), "missed:\n{}", rows);
        }
    }

    #[test]
    fn test_square_is_not_tippy() {
        assert!(!has_tippy(&board("XX_\nXX_\n___"), Mark::X));
    }

    #[test]
    fn test_line_is_not_tippy() {
        assert!(!has_tippy(&board("XXX\n___\n___"), Mark::X));
        assert!(!has_tippy(&board("X__\nX__\nX__"), Mark::X));
    }

    #[test]
    fn test_other_mark_ignored() {
        let b = board("XX_\n_XX\n___");
        assert!(has_tippy(&b, Mark::X));
        assert!(!has_tippy(&b, Mark::O));
    }

    #[test]
    fn test_mixed_marks_do_not_combine() {
        assert!(!has_tippy(&board("XX_\n_XO\n___"), Mark::X));
    }

    #[test]
    fn test_template_cells_bounds() {
        let b = Board::new(3).unwrap();
        assert_eq!(template_cells(&b, 0, 0, &TEMPLATES[0]), None);
        assert_eq!(template_cells(&b, 0, 0, &TEMPLATES[2]), None);
        assert_eq!(
            template_cells(&b, 0, 0, &TEMPLATES[1]),
            Some([(0, 0), (1, 0), (1, 1), (2, 1)])
        );
        assert_eq!(template_cells(&b, 1, 1, &TEMPLATES[3]), None);
    }
}
