use octa_core::{Point, Range};

use crate::neighbors::Step;

/// Minimal pathfinding interface. Provides the search area and the legal
/// weighted moves out of a cell.
pub trait Pather {
    /// Rectangle the search is confined to.
    fn bounds(&self) -> Range;

    /// Append the legal moves out of `p` into `buf`. The caller clears `buf`
    /// before calling. Each move cost must be > 0.
    fn neighbors(&self, p: Point, buf: &mut Vec<Step>);
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible), and should be
    /// consistent so that a closed cell is never improved later.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
