//! Brute-force placement search for the tiling puzzle.
//!
//! Unlike the maze tracer, nothing here is undone on backtrack: every
//! successful placement produces a fresh board, so each branch of the search
//! owns its own copy and sibling branches never see each other's pieces.
//!
//! Enumeration order:
//! - variant combinations, first piece set outermost
//! - placements of the first piece, then the second onto each result, ...
//! - within one piece, top-left anchors row by row (`y` outer, `x` inner)

use std::borrow::Borrow;
use std::iter;
use std::rc::Rc;

use itertools::Itertools;

use crate::grid::{Board, Piece};

/// Checks whether every filled cell of `piece` lands on an empty board cell
/// when its top-left corner sits at `(x, y)`.
#[inline]
pub fn fits(piece: &Piece, board: &Board, x: usize, y: usize) -> bool {
    piece
        .filled_cells()
        .all(|(px, py, _)| board.is_empty(x + px, y + py))
}

/// Returns a copy of `board` with `piece` stamped at `(x, y)`.
///
/// The placement must already have been checked with [`fits`].
pub fn place(piece: &Piece, board: &Board, x: usize, y: usize) -> Board {
    let mut placed = board.clone();
    for (px, py, label) in piece.filled_cells() {
        placed.set(x + px, y + py, label);
    }
    placed
}

/// Lazy sequence of boards, one per position where `piece` fits on `board`.
///
/// Anchors range over the whole board; pieces hanging off the edge are
/// rejected by [`fits`].
pub fn emplace<'a>(piece: &'a Piece, board: &'a Board) -> impl Iterator<Item = Board> + 'a {
    placements(*piece, board)
}

/// [`emplace`] over a borrowed or owned board.
fn placements<'a, B>(piece: Piece, board: B) -> impl Iterator<Item = Board> + 'a
where
    B: Borrow<Board> + 'a,
{
    let (width, height) = (board.borrow().width(), board.borrow().height());
    (0..height)
        .cartesian_product(0..width)
        .filter_map(move |(y, x)| {
            let board = board.borrow();
            fits(&piece, board, x, y).then(|| place(&piece, board, x, y))
        })
}

/// One chosen variant per piece set and the board they were placed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub pieces: Vec<Piece>,
    pub board: Board,
}

/// Places `pieces[depth..]` in order onto `board`, yielding every complete board.
fn place_from(pieces: Rc<[Piece]>, depth: usize, board: Board) -> Box<dyn Iterator<Item = Board>> {
    let Some(&piece) = pieces.get(depth) else {
        return Box::new(iter::once(board));
    };
    Box::new(
        placements(piece, board)
            .flat_map(move |next| place_from(Rc::clone(&pieces), depth + 1, next)),
    )
}

/// Lazy sequence of every complete board for one choice of variants.
pub fn arrangements_of(pieces: &[Piece], board: &Board) -> impl Iterator<Item = Board> {
    place_from(pieces.into(), 0, board.clone())
}

/// Enumerates every arrangement of one variant from each set onto `board`.
///
/// Each variant combination is searched independently, starting from the
/// same untouched board.
pub fn search<'a>(
    variant_sets: &'a [&'a [Piece]],
    board: &'a Board,
) -> impl Iterator<Item = Arrangement> + 'a {
    variant_sets
        .iter()
        .map(|variants| variants.iter().copied())
        .multi_cartesian_product()
        .flat_map(move |pieces| {
            let pieces: Rc<[Piece]> = pieces.into();
            place_from(Rc::clone(&pieces), 0, board.clone()).map(move |board| Arrangement {
                pieces: pieces.to_vec(),
                board,
            })
        })
}
