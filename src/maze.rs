//! The teleporter maze puzzle.
//!
//! The path must run from one of the `O` junctions to `E`, passing over every
//! `X` exactly once. Each digit pair is a teleporter: leaving one side of the
//! board through `1` re-enters on the other.

use crate::panel::{Panel, Walk};
use crate::parser::{parse_maze, MazeError};
use crate::tracer;

/// Diagram for the maze, one character per cell.
pub const EATER_MAZE: &str = r"
      E
      |
    1-X-X-X-X-X-X-1
        | | | | |
      X-X-X-X-X-X
      | | | | |
    X-X-X-X-X-X
    | | | | |
  X-X-X-X-X-X
  | | | | |
2-O-X-X-X-O-O-2
";

/// Maze puzzle definition.
pub struct MazePuzzle {
    pub diagram: &'static str,
}

pub const MAZE_PUZZLE: MazePuzzle = MazePuzzle {
    diagram: EATER_MAZE,
};

impl MazePuzzle {
    pub fn panel(&self) -> Result<Panel, MazeError> {
        parse_maze(self.diagram)
    }

    /// Builds the panel and finds covering walks, stopping after `max_solutions`.
    pub fn solve(&self, max_solutions: Option<usize>) -> Result<Vec<Walk>, MazeError> {
        let mut panel = self.panel()?;
        Ok(tracer::solve(&mut panel, max_solutions))
    }
}
