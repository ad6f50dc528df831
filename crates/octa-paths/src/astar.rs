use std::time::Instant;

use octa_core::{OccupancyGrid, Point, Range};

use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError};
use crate::metrics::Metrics;
use crate::pather::GridPather;
use crate::result::{PathResult, SearchReport};
use crate::state::SearchState;
use crate::traits::AstarPather;

/// 8-connected A* driver.
///
/// Holds only configuration; every call builds and drops its own search
/// state, so one `Pathfinder` can serve any number of sequential or
/// concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    /// A pathfinder with the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a least-cost path from `start` to `goal` on `grid`.
    ///
    /// Both endpoints must be inside the grid and free. An unreachable goal
    /// is reported as [`PathResult::NotFound`], not as an error.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal: Point,
    ) -> Result<SearchReport, SearchError> {
        for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if grid.at(point) == Some(true) {
                return Err(SearchError::Blocked { endpoint, point });
            }
        }
        self.search(&GridPather::new(grid), start, goal)
    }

    /// Run A* with any [`AstarPather`]. Only the endpoint bounds are
    /// checked here; passability is up to the pather.
    pub fn search<P: AstarPather>(
        &self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<SearchReport, SearchError> {
        let bounds = pather.bounds();
        let start_idx = index_in(bounds, Endpoint::Start, start)?;
        let goal_idx = index_in(bounds, Endpoint::Goal, goal)?;

        let timer = Instant::now();
        let mut st = SearchState::new(bounds, self.config.record_expansions);
        st.seed(start_idx, pather.estimate(start, goal));

        let mut limit_hit = false;
        let found = 'search: loop {
            let Some(ci) = st.pop_open() else {
                break 'search false;
            };

            if self
                .config
                .expansion_limit
                .is_some_and(|limit| st.nodes_expanded() >= limit)
            {
                limit_hit = true;
                break 'search false;
            }

            st.close(ci);
            log::trace!(
                "expand {} g={} (#{})",
                bounds.point_at(ci),
                st.g(ci),
                st.nodes_expanded()
            );

            if ci == goal_idx {
                break 'search true;
            }

            st.expand(pather, ci, goal);
        };

        let result = if found {
            PathResult::Found {
                path: st.reconstruct(goal_idx),
                cost: st.g(goal_idx),
            }
        } else {
            PathResult::NotFound
        };
        let elapsed = timer.elapsed();

        let metrics = Metrics {
            path_found: result.is_found(),
            path_length: result.path_length(),
            path_cost: result.cost(),
            nodes_expanded: st.nodes_expanded(),
            elapsed,
            expansion_limit_hit: limit_hit,
        };

        let (pushed, queued) = st.frontier_stats();
        if limit_hit {
            log::warn!(
                "search {start} -> {goal} stopped at expansion limit {}",
                metrics.nodes_expanded
            );
        }
        log::debug!(
            "search {start} -> {goal}: found={} cost={} expanded={} pushed={pushed} queued={queued} in {:?}",
            metrics.path_found,
            metrics.path_cost,
            metrics.nodes_expanded,
            metrics.elapsed
        );

        Ok(SearchReport {
            result,
            metrics,
            expansions: st.into_trace(),
        })
    }
}

/// Search `grid` with the reference configuration.
pub fn find_path(
    grid: &OccupancyGrid,
    start: Point,
    goal: Point,
) -> Result<SearchReport, SearchError> {
    Pathfinder::new().find_path(grid, start, goal)
}

fn index_in(bounds: Range, endpoint: Endpoint, point: Point) -> Result<usize, SearchError> {
    bounds.index_of(point).ok_or(SearchError::OutOfBounds {
        endpoint,
        point,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::cost_map;
    use crate::distance::{DIAGONAL_COST, STRAIGHT_COST};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::collections::HashSet;

    fn assert_valid_path(grid: &OccupancyGrid, path: &[Point], start: Point, goal: Point) -> i32 {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        let mut cost = 0;
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a move", w[0], w[1]);
            cost += if w[0].is_diagonal_to(w[1]) {
                DIAGONAL_COST
            } else {
                STRAIGHT_COST
            };
        }
        assert!(path.iter().all(|&p| grid.is_free(p)));
        cost
    }

    fn random_grid(rng: &mut StdRng, size: i32, density: f64) -> OccupancyGrid {
        OccupancyGrid::from_fn(size, |_| rng.random_bool(density))
    }

    #[test]
    fn start_equals_goal() {
        let grid = OccupancyGrid::new(16);
        let p = Point::new(4, 9);
        let rep = find_path(&grid, p, p).unwrap();
        assert_eq!(rep.result.path(), Some(&[p][..]));
        assert_eq!(rep.metrics.path_length, 1);
        assert_eq!(rep.metrics.path_cost, 0);
        assert_eq!(rep.metrics.nodes_expanded, 1);
        assert!(rep.metrics.path_found);
    }

    #[test]
    fn open_diagonal() {
        let grid = OccupancyGrid::new(16);
        let rep = find_path(&grid, Point::new(0, 0), Point::new(7, 7)).unwrap();
        let expected: Vec<Point> = (0..8).map(|i| Point::new(i, i)).collect();
        assert_eq!(rep.result.path(), Some(&expected[..]));
        assert_eq!(rep.metrics.path_cost, 7 * 14);
        assert_eq!(rep.metrics.path_length, 8);
        // Only the diagonal cells ever reach f = 98.
        assert_eq!(rep.metrics.nodes_expanded, 8);
    }

    #[test]
    fn complete_wall_is_not_found() {
        let grid = OccupancyGrid::from_fn(16, |p| p.y == 7);
        let rep = find_path(&grid, Point::new(0, 0), Point::new(15, 15)).unwrap();
        assert_eq!(rep.result, PathResult::NotFound);
        assert!(!rep.metrics.path_found);
        assert_eq!(rep.metrics.path_length, 0);
        assert_eq!(rep.metrics.path_cost, 0);
        // Every free cell above the wall is expanded before giving up.
        assert_eq!(rep.metrics.nodes_expanded, 16 * 7);
        assert!(!rep.metrics.expansion_limit_hit);
    }

    #[test]
    fn corner_cutting_is_allowed() {
        let grid = OccupancyGrid::from_ascii(
            "\
.#.
#..
...",
        )
        .unwrap();
        let rep = find_path(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(rep.result.cost(), DIAGONAL_COST);
        assert_eq!(rep.result.path_length(), 2);
    }

    #[test]
    fn ties_follow_insertion_order() {
        // (0,0) -> (2,1) has two paths of cost 24. (1,0) is pushed before
        // (1,1) with the same f, so it is expanded first and becomes the
        // goal's parent; (1,1) is still expanded before the goal because it
        // was queued earlier than the goal at equal f.
        let grid = OccupancyGrid::new(3);
        let pf = Pathfinder::with_config(SearchConfig::default().with_trace());
        let rep = pf
            .find_path(&grid, Point::new(0, 0), Point::new(2, 1))
            .unwrap();
        assert_eq!(
            rep.result.path(),
            Some(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)][..])
        );
        assert_eq!(rep.result.cost(), 24);
        assert_eq!(
            rep.expansions,
            Some(vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ])
        );
        assert_eq!(rep.metrics.nodes_expanded, 4);
    }

    #[test]
    fn trace_is_off_by_default() {
        let grid = OccupancyGrid::new(4);
        let rep = find_path(&grid, Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert!(rep.expansions.is_none());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let grid = OccupancyGrid::new(16);
        let err = find_path(&grid, Point::new(16, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                point: Point::new(16, 0),
                bounds: Range::square(16),
            }
        );
        let err = find_path(&grid, Point::new(0, 0), Point::new(3, -1)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                ..
            }
        ));
    }

    #[test]
    fn rejects_blocked_endpoints() {
        let mut grid = OccupancyGrid::new(8);
        grid.set_blocked(Point::new(5, 5), true);
        let err = find_path(&grid, Point::new(0, 0), Point::new(5, 5)).unwrap_err();
        assert_eq!(
            err,
            SearchError::Blocked {
                endpoint: Endpoint::Goal,
                point: Point::new(5, 5)
            }
        );
        assert_eq!(err.to_string(), "goal (5, 5) is blocked");
        let err = find_path(&grid, Point::new(5, 5), Point::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Blocked {
                endpoint: Endpoint::Start,
                ..
            }
        ));
    }

    #[test]
    fn expansion_limit_stops_early() {
        let grid = OccupancyGrid::from_fn(16, |p| p.y == 7);
        let pf = Pathfinder::with_config(SearchConfig::default().with_expansion_limit(20));
        let rep = pf
            .find_path(&grid, Point::new(0, 0), Point::new(15, 15))
            .unwrap();
        assert_eq!(rep.result, PathResult::NotFound);
        assert_eq!(rep.metrics.nodes_expanded, 20);
        assert!(rep.metrics.expansion_limit_hit);
    }

    #[test]
    fn generous_limit_changes_nothing() {
        let grid = OccupancyGrid::new(16);
        let start = Point::new(0, 0);
        let goal = Point::new(15, 3);
        let base = find_path(&grid, start, goal).unwrap();
        let pf = Pathfinder::with_config(SearchConfig::default().with_expansion_limit(256));
        let bounded = pf.find_path(&grid, start, goal).unwrap();
        assert_eq!(base.result, bounded.result);
        assert!(base.metrics.same_work(&bounded.metrics));
    }

    #[test]
    fn matches_dijkstra_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let pf = Pathfinder::with_config(SearchConfig::default().with_trace());
        for _ in 0..200 {
            let mut grid = random_grid(&mut rng, 12, 0.3);
            let start = Point::new(rng.random_range(0..12), rng.random_range(0..12));
            let goal = Point::new(rng.random_range(0..12), rng.random_range(0..12));
            grid.set_blocked(start, false);
            grid.set_blocked(goal, false);

            let rep = pf.find_path(&grid, start, goal).unwrap();
            let oracle = cost_map(&GridPather::new(&grid), start);

            match oracle.at(goal) {
                Some(best) => {
                    let path = rep.result.path().expect("oracle reached the goal");
                    let walked = assert_valid_path(&grid, path, start, goal);
                    assert_eq!(walked, best);
                    assert_eq!(rep.metrics.path_cost, best);
                    assert_eq!(rep.metrics.path_length, path.len());
                }
                None => {
                    assert_eq!(rep.result, PathResult::NotFound);
                    // Exhaustion closes exactly the start's component.
                    assert_eq!(rep.metrics.nodes_expanded, oracle.reachable_count());
                }
            }

            let trace = rep.expansions.unwrap();
            let unique: HashSet<Point> = trace.iter().copied().collect();
            assert_eq!(unique.len(), trace.len(), "a cell was expanded twice");
            assert_eq!(trace.len(), rep.metrics.nodes_expanded);
            assert!(rep.metrics.nodes_expanded <= grid.len());
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = random_grid(&mut rng, 16, 0.25);
        grid.set_blocked(Point::new(1, 1), false);
        grid.set_blocked(Point::new(14, 14), false);
        let pf = Pathfinder::with_config(SearchConfig::default().with_trace());
        let a = pf
            .find_path(&grid, Point::new(1, 1), Point::new(14, 14))
            .unwrap();
        for _ in 0..5 {
            let b = pf
                .find_path(&grid, Point::new(1, 1), Point::new(14, 14))
                .unwrap();
            assert_eq!(a.result, b.result);
            assert_eq!(a.expansions, b.expansions);
            assert!(a.metrics.same_work(&b.metrics));
        }
    }
}
