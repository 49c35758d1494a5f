//! Acceptance predicates applied to finished search results.

use crate::grid::Board;
use crate::panel::{Marker, Walk};

/// Every dot junction has an exit in the walk's frozen panel.
pub fn all_dots_covered(walk: &Walk) -> bool {
    walk.panel
        .junctions
        .iter()
        .all(|junction| junction.marker != Marker::Dot || junction.exit.is_some())
}

/// Occupancy mirrors left-to-right about the vertical center line.
pub fn is_symmetrical(board: &Board) -> bool {
    let width = board.width();
    (0..board.height()).all(|y| {
        (0..width / 2).all(|x| board.is_empty(x, y) == board.is_empty(width - 1 - x, y))
    })
}

/// The middle column is occupied in every row.
pub fn center_line_filled(board: &Board) -> bool {
    let center = board.width() / 2;
    (0..board.height()).all(|y| !board.is_empty(center, y))
}

/// None of `cells` is empty.
///
/// Off-board cells are never empty, so they always pass.
pub fn cells_filled(board: &Board, cells: &[(usize, usize)]) -> bool {
    cells.iter().all(|&(x, y)| !board.is_empty(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Direction, Junction, Panel};

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::blank(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.bytes().enumerate() {
                board.set(x, y, cell);
            }
        }
        board
    }

    #[test]
    fn test_symmetry_ignores_labels() {
        let board = board_from(&["AB BA", " CCD ", "     "]);
        assert!(is_symmetrical(&board));
        let board = board_from(&["AB  A", "     "]);
        assert!(!is_symmetrical(&board));
    }

    #[test]
    fn test_symmetry_on_even_width() {
        assert!(is_symmetrical(&board_from(&["A  A", " BB "])));
        assert!(!is_symmetrical(&board_from(&["A   ", "    "])));
    }

    #[test]
    fn test_symmetrical_boards_mirror_occupancy() {
        let board = board_from(&[" AAA ", " CCC ", "D D D"]);
        assert!(is_symmetrical(&board));
        for y in 0..board.height() {
            for x in 0..board.width() / 2 {
                assert_eq!(board.is_empty(x, y), board.is_empty(board.width() - 1 - x, y));
            }
        }
    }

    #[test]
    fn test_center_line() {
        assert!(center_line_filled(&board_from(&["  A  ", "  B  ", " CCC "])));
        assert!(!center_line_filled(&board_from(&["  A  ", "     ", " CCC "])));
    }

    #[test]
    fn test_cells_filled() {
        let board = board_from(&["   ", " A ", "   "]);
        assert!(cells_filled(&board, &[(1, 1)]));
        assert!(!cells_filled(&board, &[(1, 1), (0, 0)]));
        assert!(
            cells_filled(&board, &[(7, 7)]),
            "off-board cells count as not empty"
        );
    }

    #[test]
    fn test_all_dots_covered() {
        let mut junctions = vec![
            Junction::new(0, (0, 0), Marker::Start),
            Junction::new(1, (2, 0), Marker::Dot),
            Junction::new(2, (4, 0), Marker::End),
            Junction::new(3, (6, 0), Marker::Teleport),
        ];
        junctions[0].exit = Some(Direction::E);
        let mut walk = Walk {
            panel: Panel { junctions },
            start: 0,
        };
        assert!(!all_dots_covered(&walk));

        walk.panel[1].exit = Some(Direction::E);
        assert!(all_dots_covered(&walk));
    }
}
