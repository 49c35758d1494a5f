//! The symmetry tiling puzzle: piece variants, board size and acceptance rules.
//!
//! One variant of each of the four pieces A-D is placed on a blank 5x5 board.
//! A finished board is a solution when its occupancy is left-right
//! symmetrical, its middle column is completely covered and the two fixed
//! interior cells are covered.

use log::info;

use crate::filters::{cells_filled, center_line_filled, is_symmetrical};
use crate::grid::{Board, Piece};
use crate::solver::{search, Arrangement};

/// Piece A, an L-tromino in two mirror orientations.
pub const A_PIECES: &[Piece] = &[
    Piece::new(2, 2, b" AAA"),
    Piece::new(2, 2, b"A AA"),
];

/// Piece B, an L-tromino opening to the bottom right.
pub const B_PIECES: &[Piece] = &[Piece::new(2, 2, b"BBB ")];

/// Piece C, a straight tromino.
pub const C_PIECES: &[Piece] = &[Piece::new(3, 1, b"CCC")];

/// Piece D, an L-tetromino in three orientations.
pub const D_PIECES: &[Piece] = &[
    Piece::new(2, 3, b"DDD D "),
    Piece::new(2, 3, b"DD D D"),
    Piece::new(2, 3, b" D DDD"),
];

/// Tiling puzzle definition.
pub struct SymmetryPuzzle {
    pub width: usize,
    pub height: usize,
    /// Interchangeable variants for each piece, in placement order.
    pub piece_sets: &'static [&'static [Piece]],
    /// Cells that must be covered in a solution.
    pub required_cells: &'static [(usize, usize)],
}

/// The 5x5 puzzle with pieces A, B, C and D.
pub const SYMMETRY_PUZZLE: SymmetryPuzzle = SymmetryPuzzle {
    width: 5,
    height: 5,
    piece_sets: &[A_PIECES, B_PIECES, C_PIECES, D_PIECES],
    required_cells: &[(1, 1), (1, 3)],
};

impl SymmetryPuzzle {
    /// Whether a completed board satisfies every acceptance rule.
    pub fn accepts(&self, board: &Board) -> bool {
        is_symmetrical(board)
            && center_line_filled(board)
            && cells_filled(board, self.required_cells)
    }

    /// Finds accepted arrangements in search order, stopping after `max_solutions`.
    pub fn solve(&self, max_solutions: Option<usize>) -> Vec<Arrangement> {
        let blank = Board::blank(self.width, self.height);
        let solutions: Vec<Arrangement> = search(self.piece_sets, &blank)
            .filter(|arrangement| self.accepts(&arrangement.board))
            .take(max_solutions.unwrap_or(usize::MAX))
            .collect();

        info!("symmetry: {} solutions", solutions.len());
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_count() {
        let solutions = SYMMETRY_PUZZLE.solve(None);
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn test_solutions_pass_every_rule() {
        for solution in SYMMETRY_PUZZLE.solve(None) {
            let board = &solution.board;
            assert!(is_symmetrical(board));
            assert!(center_line_filled(board));
            assert!(!board.is_empty(1, 1));
            assert!(!board.is_empty(1, 3));
            assert_eq!(solution.pieces.len(), 4);
        }
    }

    #[test]
    fn test_first_solution_board() {
        let solutions = SYMMETRY_PUZZLE.solve(Some(1));
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].pieces[0], A_PIECES[0]);
        assert_eq!(solutions[0].pieces[3], D_PIECES[0]);
        assert_eq!(
            solutions[0].board.to_string(),
            " CCC \n DDA \n DAA \n DBB \n  B  \n"
        );
    }

    #[test]
    fn test_search_is_repeatable() {
        let first = SYMMETRY_PUZZLE.solve(None);
        let second = SYMMETRY_PUZZLE.solve(None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_piece_sizes() {
        let filled = |piece: &Piece| piece.filled_cells().count();
        assert!(A_PIECES.iter().all(|p| filled(p) == 3));
        assert!(B_PIECES.iter().all(|p| filled(p) == 3));
        assert!(C_PIECES.iter().all(|p| filled(p) == 3));
        assert!(D_PIECES.iter().all(|p| filled(p) == 4));
    }
}
