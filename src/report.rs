//! Text rendering of solutions.

use crate::panel::{Junction, Walk};
use crate::solver::Arrangement;

const RULE: &str = "====================";

/// One line per junction: position, marker and the exit taken.
pub fn format_junction(junction: &Junction) -> String {
    let (x, y) = junction.position;
    let exit = junction
        .exit
        .map_or_else(|| "None".to_string(), |direction| direction.to_string());
    format!("({x}, {y}), {}, {exit}", junction.marker)
}

/// Formats one walk, junctions listed in path order.
pub fn format_walk(walk: &Walk) -> String {
    let mut output = format!("Solution: {RULE}\n");
    for junction in walk.junctions() {
        output.push_str(&format_junction(junction));
        output.push('\n');
    }
    output
}

/// Formats a set of maze solutions, count first.
pub fn format_walks(walks: &[Walk]) -> String {
    let mut output = format!("{} solutions\n\n", walks.len());
    for walk in walks {
        output.push_str(&format_walk(walk));
        output.push('\n');
    }
    output
}

/// Formats one arrangement: each chosen piece, then the finished board.
pub fn format_arrangement(arrangement: &Arrangement) -> String {
    let mut output = format!("Solution: {RULE}\n");
    for (label, piece) in (b'a'..).zip(&arrangement.pieces) {
        output.push_str(&format!("{}:\n{piece}\n", label as char));
    }
    output.push_str(&format!("\nboard:\n{}\n", arrangement.board));
    output
}

/// Formats a set of tiling solutions, count last.
pub fn format_arrangements(arrangements: &[Arrangement]) -> String {
    let mut output = String::new();
    for arrangement in arrangements {
        output.push_str(&format_arrangement(arrangement));
    }
    output.push_str(&format!("\n{} solutions\n", arrangements.len()));
    output
}
