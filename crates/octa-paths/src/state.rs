use octa_core::{Point, Range};

use crate::frontier::Frontier;
use crate::neighbors::Step;
use crate::traits::AstarPather;

/// Sentinel g-score for cells with no recorded cost.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent for the start cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Transient bookkeeping of one A* invocation, indexed by flat cell index.
///
/// A cell is *unseen* while `g == UNREACHABLE`, *open* once it has a score
/// and is not closed, and *closed* after its first pop.
pub(crate) struct SearchState {
    bounds: Range,
    g: Vec<i32>,
    parent: Vec<usize>,
    closed: Vec<bool>,
    frontier: Frontier,
    nodes_expanded: usize,
    trace: Option<Vec<Point>>,
    // scratch buffer for neighbor queries
    nbuf: Vec<Step>,
}

impl SearchState {
    pub(crate) fn new(bounds: Range, record: bool) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            g: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            closed: vec![false; len],
            frontier: Frontier::with_capacity(len),
            nodes_expanded: 0,
            trace: record.then(Vec::new),
            nbuf: Vec::with_capacity(8),
        }
    }

    #[inline]
    pub(crate) fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> i32 {
        self.g[idx]
    }

    /// Frontier statistics: (entries pushed, entries still queued).
    pub(crate) fn frontier_stats(&self) -> (u64, usize) {
        (self.frontier.pushed(), self.frontier.len())
    }

    /// Record the start cell with cost 0 and queue it.
    pub(crate) fn seed(&mut self, idx: usize, h: i32) {
        self.g[idx] = 0;
        self.parent[idx] = NO_PARENT;
        self.frontier.push(h, idx);
    }

    /// Pop the best open cell, discarding stale copies of closed cells.
    pub(crate) fn pop_open(&mut self) -> Option<usize> {
        while let Some(e) = self.frontier.pop() {
            if !self.closed[e.idx] {
                return Some(e.idx);
            }
        }
        None
    }

    /// Move a popped cell into the closed set.
    pub(crate) fn close(&mut self, idx: usize) {
        debug_assert!(!self.closed[idx], "cell closed twice");
        self.closed[idx] = true;
        self.nodes_expanded += 1;
        if let Some(trace) = self.trace.as_mut() {
            trace.push(self.bounds.point_at(idx));
        }
    }

    /// Relax every legal move out of the closed cell `ci` towards `goal`.
    pub(crate) fn expand<P: AstarPather>(&mut self, pather: &P, ci: usize, goal: Point) {
        let cp = self.bounds.point_at(ci);
        let current_g = self.g[ci];

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for step in nbuf.iter() {
            let Some(ni) = self.bounds.index_of(step.to) else {
                continue;
            };
            if self.closed[ni] {
                continue;
            }
            let tentative_g = current_g + step.cost;
            // Unseen cells hold UNREACHABLE, so one comparison covers both
            // "no score yet" and "strictly better score".
            if tentative_g >= self.g[ni] {
                continue;
            }
            self.g[ni] = tentative_g;
            self.parent[ni] = ci;
            self.frontier
                .push(tentative_g + pather.estimate(step.to, goal), ni);
        }

        self.nbuf = nbuf;
    }

    /// Follow parent links from `goal` back to the start and return the
    /// path in start→goal order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.bounds.point_at(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }

    /// Consume the state, returning the expansion trace if one was kept.
    pub(crate) fn into_trace(self) -> Option<Vec<Point>> {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pather::GridPather;
    use octa_core::OccupancyGrid;

    #[test]
    fn stale_entries_are_skipped() {
        let bounds = Range::square(4);
        let mut st = SearchState::new(bounds, true);
        st.seed(0, 30);
        st.frontier.push(40, 0);
        assert_eq!(st.pop_open(), Some(0));
        st.close(0);
        assert_eq!(st.pop_open(), None);
        assert_eq!(st.nodes_expanded(), 1);
        assert_eq!(st.into_trace(), Some(vec![Point::new(0, 0)]));
    }

    #[test]
    fn expand_relaxes_only_improvements() {
        let grid = OccupancyGrid::new(3);
        let pather = GridPather::new(&grid);
        let bounds = grid.bounds();
        let goal = Point::new(2, 2);
        let mut st = SearchState::new(bounds, false);

        let start = bounds.index_of(Point::new(0, 0)).unwrap();
        st.seed(start, 28);
        assert_eq!(st.pop_open(), Some(start));
        st.close(start);
        st.expand(&pather, start, goal);

        let right = bounds.index_of(Point::new(1, 0)).unwrap();
        let diag = bounds.index_of(Point::new(1, 1)).unwrap();
        assert_eq!(st.g(right), 10);
        assert_eq!(st.g(diag), 14);
        // start + 3 neighbors
        assert_eq!(st.frontier_stats(), (4, 3));

        // Expanding (1, 0) offers (1, 1) at 24, which is no improvement.
        st.close(right);
        st.expand(&pather, right, goal);
        assert_eq!(st.g(diag), 14);
        assert_eq!(st.reconstruct(diag), vec![Point::new(0, 0), Point::new(1, 1)]);
    }
}
