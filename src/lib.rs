//! Puzzle Solver Library
//!
//! Exhaustive solvers for two small combinatorial puzzles: a teleporter maze
//! that must be traced through every dot, and a symmetry tiling puzzle on a
//! 5x5 board.

pub mod filters;
pub mod grid;
pub mod maze;
pub mod panel;
pub mod parser;
pub mod pieces;
pub mod report;
pub mod solver;
pub mod tracer;

use maze::MazePuzzle;
use parser::MazeError;
use pieces::SymmetryPuzzle;

/// Trait that erases the concrete puzzle type for dynamic dispatch.
///
/// Lets callers solve, count and print any puzzle without knowing whether it
/// is a maze or a tiling.
pub trait PuzzleOps {
    fn name(&self) -> &'static str;
    fn count_solutions(&self) -> Result<usize, MazeError>;
    /// Solves and renders at most `max_solutions` solutions.
    fn format_solutions(&self, max_solutions: Option<usize>) -> Result<String, MazeError>;
}

impl PuzzleOps for MazePuzzle {
    fn name(&self) -> &'static str {
        "maze"
    }

    fn count_solutions(&self) -> Result<usize, MazeError> {
        Ok(self.solve(None)?.len())
    }

    fn format_solutions(&self, max_solutions: Option<usize>) -> Result<String, MazeError> {
        Ok(report::format_walks(&self.solve(max_solutions)?))
    }
}

impl PuzzleOps for SymmetryPuzzle {
    fn name(&self) -> &'static str {
        "symmetry"
    }

    fn count_solutions(&self) -> Result<usize, MazeError> {
        Ok(self.solve(None).len())
    }

    fn format_solutions(&self, max_solutions: Option<usize>) -> Result<String, MazeError> {
        Ok(report::format_arrangements(&self.solve(max_solutions)))
    }
}

/// Every puzzle this crate knows, in the order they are run.
pub fn puzzles() -> [&'static dyn PuzzleOps; 2] {
    [&maze::MAZE_PUZZLE, &pieces::SYMMETRY_PUZZLE]
}
