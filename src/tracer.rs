//! Exhaustive path search over a maze panel.
//!
//! The tracer walks the panel depth-first, marking each junction on the
//! current path with the direction it leaves by. Directions are tried in the
//! order N, S, E, W. Whenever the path steps onto an end junction the whole
//! panel is cloned into a [`Walk`]; the search then carries on through the end
//! junction, so longer paths that pass over it are explored too.
//!
//! The search is iterative with an explicit stack of frames. Exits are set on
//! the shared panel and cleared again on backtrack, so after the iterator is
//! exhausted (or dropped) the panel is back to its untouched state.

use log::{info, trace};

use crate::filters::all_dots_covered;
use crate::panel::{Direction, Marker, Panel, Walk};

/// One junction on the current path.
struct Frame {
    id: usize,
    /// Index into [`Direction::ALL`] of the next direction to try.
    next_direction: usize,
}

/// Lazy sequence of every walk from `start` that reaches an end junction.
pub struct Trace<'p> {
    panel: &'p mut Panel,
    start: usize,
    stack: Vec<Frame>,
    /// Junction about to be stepped onto, `None` when the last step led nowhere.
    entering: Option<usize>,
}

impl<'p> Trace<'p> {
    pub fn new(panel: &'p mut Panel, start: usize) -> Self {
        Self {
            panel,
            start,
            stack: Vec::new(),
            entering: Some(start),
        }
    }
}

impl Iterator for Trace<'_> {
    type Item = Walk;

    fn next(&mut self) -> Option<Walk> {
        loop {
            if let Some(id) = self.entering.take() {
                let junction = &self.panel[id];
                if junction.exit.is_some() {
                    // already on the path
                    continue;
                }
                let reached_end = junction.marker == Marker::End;
                self.stack.push(Frame {
                    id,
                    next_direction: 0,
                });
                if reached_end {
                    let walk = Walk {
                        panel: self.panel.clone(),
                        start: self.start,
                    };
                    trace!(
                        "walk from {} reached end {} after {} steps",
                        self.start,
                        id,
                        self.stack.len()
                    );
                    return Some(walk);
                }
                continue;
            }

            let frame = self.stack.last_mut()?;
            match Direction::ALL.get(frame.next_direction) {
                Some(&direction) => {
                    frame.next_direction += 1;
                    let junction = &mut self.panel[frame.id];
                    junction.exit = Some(direction);
                    self.entering = junction.neighbor(direction);
                }
                None => {
                    let id = frame.id;
                    self.stack.pop();
                    self.panel[id].exit = None;
                }
            }
        }
    }
}

impl Drop for Trace<'_> {
    fn drop(&mut self) {
        for frame in self.stack.drain(..) {
            self.panel[frame.id].exit = None;
        }
    }
}

/// Traces from `start` and keeps only walks that pass over every dot.
pub fn covering_walks(panel: &mut Panel, start: usize) -> impl Iterator<Item = Walk> + '_ {
    Trace::new(panel, start).filter(all_dots_covered)
}

/// Finds dot-covering walks from every start junction, in start id order.
///
/// Stops pulling from the search once `max_solutions` walks are found.
pub fn solve(panel: &mut Panel, max_solutions: Option<usize>) -> Vec<Walk> {
    let starts: Vec<usize> = panel.find(Marker::Start).collect();
    let limit = max_solutions.unwrap_or(usize::MAX);

    let mut solutions = Vec::new();
    for start in starts {
        let remaining = limit - solutions.len();
        if remaining == 0 {
            break;
        }
        solutions.extend(covering_walks(panel, start).take(remaining));
    }

    info!("maze: {} solutions", solutions.len());
    solutions
}
