//! Single-source Dijkstra cost map, used as an exact-cost oracle for A*.

use octa_core::{Point, Range};

use crate::frontier::Frontier;
use crate::state::UNREACHABLE;
use crate::traits::Pather;

/// Least cost from one source to every cell of a pather's bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMap {
    bounds: Range,
    source: Point,
    costs: Vec<i32>,
}

impl CostMap {
    /// The cell costs were measured from.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Least cost from the source to `p`, or `None` if `p` is unreachable
    /// or outside the bounds.
    pub fn at(&self, p: Point) -> Option<i32> {
        let i = self.bounds.index_of(p)?;
        let c = self.costs[i];
        (c != UNREACHABLE).then_some(c)
    }

    /// Number of cells reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.costs.iter().filter(|&&c| c != UNREACHABLE).count()
    }
}

/// Compute the least cost from `source` to every reachable cell.
///
/// Uses the same moves and costs as A* but no heuristic, so the result is
/// exact regardless of the estimate. An out-of-bounds source yields a map
/// with nothing reachable.
pub fn cost_map<P: Pather>(pather: &P, source: Point) -> CostMap {
    let bounds = pather.bounds();
    let len = bounds.len();
    let mut costs = vec![UNREACHABLE; len];
    let mut done = vec![false; len];

    let Some(si) = bounds.index_of(source) else {
        return CostMap {
            bounds,
            source,
            costs,
        };
    };

    let mut open = Frontier::with_capacity(len);
    costs[si] = 0;
    open.push(0, si);

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if done[ci] {
            continue;
        }
        done[ci] = true;
        let current_g = costs[ci];

        nbuf.clear();
        pather.neighbors(bounds.point_at(ci), &mut nbuf);

        for step in nbuf.iter() {
            let Some(ni) = bounds.index_of(step.to) else {
                continue;
            };
            let tentative = current_g + step.cost;
            if done[ni] || tentative >= costs[ni] {
                continue;
            }
            costs[ni] = tentative;
            open.push(tentative, ni);
        }
    }

    CostMap {
        bounds,
        source,
        costs,
    }
}
