use octa_core::{OccupancyGrid, Point, Range};

use crate::distance::octile;
use crate::neighbors::{Step, octile_neighbors};
use crate::traits::{AstarPather, Pather};

/// Adapts an [`OccupancyGrid`] to the pather traits: 8-connected moves onto
/// free cells, octile heuristic.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> GridPather<'a> {
    /// Borrow `grid` for the lifetime of the pather.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a OccupancyGrid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    #[inline]
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Step>) {
        octile_neighbors(p, self.grid.bounds(), |n| self.grid.is_free(n), buf);
    }
}

impl AstarPather for GridPather<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}
