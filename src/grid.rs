//! Board and piece representation for the tiling puzzle.
//!
//! Both are flat row-major grids of ASCII cells, where a blank (space) cell
//! is empty and any other byte is a label. Cell `(x, y)` lives at index
//! `y * width + x`.

use std::fmt;

/// The empty cell value.
pub const BLANK: u8 = b' ';

/// Converts (x, y) coordinates to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(width: usize, x: usize, y: usize) -> usize {
    y * width + x
}

#[inline(always)]
fn is_blank(cell: u8) -> bool {
    cell.is_ascii_whitespace()
}

/// A mutable grid that pieces are stamped onto.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Board {
    /// A board of the given size with every cell empty.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// Coordinates must be in range; check with [`Board::is_empty`] first.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) is off the board");
        self.cells[coord_to_idx(self.width, x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, label: u8) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) is off the board");
        self.cells[coord_to_idx(self.width, x, y)] = label;
    }

    /// True if `(x, y)` is on the board and unoccupied.
    ///
    /// Off-board coordinates count as unavailable.
    #[inline]
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && is_blank(self.get(x, y))
    }
}

/// A fixed rectangular piece shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    width: usize,
    height: usize,
    cells: &'static [u8],
}

impl Piece {
    /// Creates a piece from row-major cells; blanks are holes in the shape.
    pub const fn new(width: usize, height: usize, cells: &'static [u8]) -> Self {
        assert!(cells.len() == width * height, "cells must cover width * height");
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, px: usize, py: usize) -> u8 {
        self.cells[coord_to_idx(self.width, px, py)]
    }

    #[inline]
    pub fn is_filled(&self, px: usize, py: usize) -> bool {
        !is_blank(self.get(px, py))
    }

    /// Offsets and labels of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..self.height).flat_map(move |py| {
            (0..self.width)
                .filter(move |&px| self.is_filled(px, py))
                .map(move |px| (px, py, self.get(px, py)))
        })
    }
}

fn write_rows(f: &mut fmt::Formatter<'_>, width: usize, cells: &[u8]) -> fmt::Result {
    for row in cells.chunks(width.max(1)) {
        for &cell in row {
            write!(f, "{}", cell as char)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.width, &self.cells)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.width, self.cells)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Piece {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
