//! Maze graph types: junctions, the panel that owns them, and frozen walks.
//!
//! A junction occupies one cell of the maze diagram and links to at most one
//! neighbor per compass direction. During search each junction records the
//! direction the current path leaves it by; a [`Walk`] is a copy of the panel
//! taken at the moment a path reached an end junction.

use std::fmt;

/// Diagram coordinate `(x, y)`, with `y` growing downwards.
pub type Position = (usize, usize);

/// A compass direction between neighboring junctions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    /// All directions in search priority order.
    pub const ALL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// The direction pointing back the way this one came.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
        }
    }

    /// Position of this direction within [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// What a junction represents in the puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    None,
    Start,
    Dot,
    Teleport,
    End,
}

impl Marker {
    /// Maps a diagram character to its marker.
    pub fn from_symbol(symbol: char) -> Marker {
        match symbol {
            'X' => Marker::Dot,
            'E' => Marker::End,
            'O' => Marker::Start,
            digit if digit.is_ascii_digit() => Marker::Teleport,
            _ => Marker::None,
        }
    }
}

/// A node of the maze graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Junction {
    pub id: usize,
    pub position: Position,
    pub marker: Marker,
    /// Direction the path under construction leaves by, `None` when off the path.
    pub exit: Option<Direction>,
    neighbors: [Option<usize>; 4],
}

impl Junction {
    pub fn new(id: usize, position: Position, marker: Marker) -> Self {
        Self {
            id,
            position,
            marker,
            exit: None,
            neighbors: [None; 4],
        }
    }

    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors[direction.index()]
    }

    #[inline]
    pub fn set_neighbor(&mut self, direction: Direction, id: usize) {
        self.neighbors[direction.index()] = Some(id);
    }
}

/// The maze graph; junction ids index directly into `junctions`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Panel {
    pub junctions: Vec<Junction>,
}

impl Panel {
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// Ids of every junction carrying `marker`, in id order.
    pub fn find(&self, marker: Marker) -> impl Iterator<Item = usize> + '_ {
        self.junctions
            .iter()
            .filter(move |junction| junction.marker == marker)
            .map(|junction| junction.id)
    }

    /// The junction built from the diagram cell at `position`, if any.
    pub fn junction_at(&self, position: Position) -> Option<&Junction> {
        self.junctions
            .iter()
            .find(|junction| junction.position == position)
    }

    /// Clears every recorded exit.
    pub fn reset(&mut self) {
        for junction in &mut self.junctions {
            junction.exit = None;
        }
    }
}

impl std::ops::Index<usize> for Panel {
    type Output = Junction;

    fn index(&self, id: usize) -> &Junction {
        &self.junctions[id]
    }
}

impl std::ops::IndexMut<usize> for Panel {
    fn index_mut(&mut self, id: usize) -> &mut Junction {
        &mut self.junctions[id]
    }
}

/// A solution path, frozen when the tracer reached an end junction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    pub panel: Panel,
    pub start: usize,
}

impl Walk {
    /// Follows the frozen exits from `start` and returns the visited ids.
    ///
    /// # Panics
    ///
    /// If the walk revisits a junction, follows an exit with no neighbor, or
    /// stops anywhere but an end junction. Each indicates a tracer bug.
    pub fn path(&self) -> Vec<usize> {
        let mut visited = vec![false; self.panel.len()];
        let mut path = Vec::new();
        let mut position = self.start;

        loop {
            assert!(
                !visited[position],
                "Bad path: junction {position} visited twice"
            );
            visited[position] = true;
            path.push(position);

            let junction = &self.panel[position];
            let Some(exit) = junction.exit else {
                assert!(
                    junction.marker == Marker::End,
                    "Bad path: walk stops on {:?} junction {position}",
                    junction.marker
                );
                return path;
            };

            position = match junction.neighbor(exit) {
                Some(next) => next,
                None => panic!("Bad path: junction {position} exits {exit:?} into nothing"),
            };
        }
    }

    /// Junctions in path order.
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> + '_ {
        self.path().into_iter().map(move |id| &self.panel[id])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_panel() -> Panel {
        // O - X - E along one row
        let mut junctions = vec![
            Junction::new(0, (0, 0), Marker::Start),
            Junction::new(1, (2, 0), Marker::Dot),
            Junction::new(2, (4, 0), Marker::End),
        ];
        junctions[0].set_neighbor(Direction::E, 1);
        junctions[1].set_neighbor(Direction::W, 0);
        junctions[1].set_neighbor(Direction::E, 2);
        junctions[2].set_neighbor(Direction::W, 1);
        Panel { junctions }
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_marker_from_symbol() {
        assert_eq!(Marker::from_symbol('X'), Marker::Dot);
        assert_eq!(Marker::from_symbol('E'), Marker::End);
        assert_eq!(Marker::from_symbol('O'), Marker::Start);
        assert_eq!(Marker::from_symbol('7'), Marker::Teleport);
        assert_eq!(Marker::from_symbol('q'), Marker::None);
    }

    #[test]
    fn test_find_and_lookup() {
        let panel = line_panel();
        assert_eq!(panel.find(Marker::Dot).collect::<Vec<_>>(), vec![1]);
        assert_eq!(panel.junction_at((4, 0)).map(|j| j.id), Some(2));
        assert!(panel.junction_at((1, 0)).is_none());
    }

    #[test]
    fn test_walk_path_follows_exits() {
        let mut panel = line_panel();
        panel[0].exit = Some(Direction::E);
        panel[1].exit = Some(Direction::E);
        let walk = Walk { panel, start: 0 };

        assert_eq!(walk.path(), vec![0, 1, 2]);
        let markers: Vec<Marker> = walk.junctions().map(|j| j.marker).collect();
        assert_eq!(markers, vec![Marker::Start, Marker::Dot, Marker::End]);
    }

    #[test]
    #[should_panic(expected = "Bad path")]
    fn test_walk_path_must_end_on_end_marker() {
        let mut panel = line_panel();
        panel[0].exit = Some(Direction::E);
        let walk = Walk { panel, start: 0 };
        walk.path();
    }

    #[test]
    #[should_panic(expected = "visited twice")]
    fn test_walk_path_rejects_cycles() {
        let mut panel = line_panel();
        panel[0].exit = Some(Direction::E);
        panel[1].exit = Some(Direction::W);
        let walk = Walk { panel, start: 0 };
        walk.path();
    }

    #[test]
    fn test_reset_clears_exits() {
        let mut panel = line_panel();
        panel[0].exit = Some(Direction::E);
        panel.reset();
        assert!(panel.junctions.iter().all(|j| j.exit.is_none()));
    }
}
