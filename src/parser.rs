//! Builds a [`Panel`] from an ASCII maze diagram.
//!
//! Three passes over the text:
//! 1. every junction character becomes a [`Junction`] with a sequential id
//! 2. `|` and `-` link the junctions above/below or left/right of them
//! 3. junctions sharing a digit form a teleporter group whose edges are
//!    spliced together, so paths skip straight over the group
//!
//! Whitespace is structural, `|` and `-` are edges, and any other character
//! is a junction.

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::panel::{Direction, Junction, Marker, Panel, Position};

/// Fatal problems found while building a panel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("malformed maze: edge {symbol:?} at {position:?} has no junction to the {side}")]
    MissingJunction {
        symbol: char,
        position: Position,
        side: Direction,
    },

    #[error("teleporter group {group:?} has a second {direction} edge at {position:?}")]
    DuplicateEdge {
        group: char,
        direction: Direction,
        position: Position,
    },
}

/// Junctions sharing one digit, in discovery order.
struct TeleporterGroup {
    label: char,
    members: Vec<usize>,
}

/// Parses a maze diagram into a fully linked panel.
pub fn parse_maze(diagram: &str) -> Result<Panel, MazeError> {
    let mut junctions = Vec::new();
    let mut by_position: FxHashMap<Position, usize> = FxHashMap::default();
    let mut groups: Vec<TeleporterGroup> = Vec::new();

    for (position, symbol) in cells(diagram) {
        if symbol.is_whitespace() || is_edge_symbol(symbol) {
            continue;
        }

        let id = junctions.len();
        let marker = Marker::from_symbol(symbol);
        junctions.push(Junction::new(id, position, marker));
        by_position.insert(position, id);

        if marker == Marker::Teleport {
            match groups.iter_mut().find(|group| group.label == symbol) {
                Some(group) => group.members.push(id),
                None => groups.push(TeleporterGroup {
                    label: symbol,
                    members: vec![id],
                }),
            }
        }
    }

    let mut panel = Panel { junctions };

    for (position, symbol) in cells(diagram) {
        let (x, y) = position;

        // first endpoint lies north/west of the edge, second south/east
        let (first, second, toward_second) = match symbol {
            '|' => (
                y.checked_sub(1).map(|north| (x, north)),
                (x, y + 1),
                Direction::S,
            ),
            '-' => (
                x.checked_sub(1).map(|west| (west, y)),
                (x + 1, y),
                Direction::E,
            ),
            _ => continue,
        };

        let lookup = |candidate: Option<Position>, side: Direction| {
            candidate
                .and_then(|at| by_position.get(&at).copied())
                .ok_or(MazeError::MissingJunction {
                    symbol,
                    position,
                    side,
                })
        };
        let first = lookup(first, toward_second.opposite())?;
        let second = lookup(Some(second), toward_second)?;

        panel[first].set_neighbor(toward_second, second);
        panel[second].set_neighbor(toward_second.opposite(), first);
    }

    for group in &groups {
        fuse_teleporters(&mut panel, group)?;
    }

    debug!(
        "parsed maze: {} junctions, {} teleporter groups",
        panel.len(),
        groups.len()
    );

    Ok(panel)
}

/// Splices the edges entering a teleporter group directly onto each other.
///
/// Each direction may be contributed by at most one member. The junction
/// reached through a member's west edge gets the group's east neighbor as its
/// new east neighbor, and likewise for the other directions.
fn fuse_teleporters(panel: &mut Panel, group: &TeleporterGroup) -> Result<(), MazeError> {
    let mut outer: [Option<usize>; 4] = [None; 4];

    for &member in &group.members {
        for (slot, direction) in outer.iter_mut().zip(Direction::ALL) {
            let Some(neighbor) = panel[member].neighbor(direction) else {
                continue;
            };
            if slot.is_some() {
                return Err(MazeError::DuplicateEdge {
                    group: group.label,
                    direction,
                    position: panel[member].position,
                });
            }
            *slot = Some(neighbor);
        }
    }

    for &member in &group.members {
        for direction in Direction::ALL {
            let far = outer[direction.opposite().index()];
            if let (Some(near), Some(far)) = (panel[member].neighbor(direction), far) {
                panel[near].set_neighbor(direction.opposite(), far);
            }
        }
    }

    debug!(
        "fused teleporter group {:?} ({} members)",
        group.label,
        group.members.len()
    );

    Ok(())
}

/// Every character of the diagram with its `(x, y)` position.
fn cells(diagram: &str) -> impl Iterator<Item = (Position, char)> + '_ {
    diagram.split('\n').enumerate().flat_map(|(y, line)| {
        line.chars()
            .enumerate()
            .map(move |(x, symbol)| ((x, y), symbol))
    })
}

#[inline]
fn is_edge_symbol(symbol: char) -> bool {
    matches!(symbol, '|' | '-')
}
