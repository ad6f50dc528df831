use std::collections::HashSet;
use std::fmt;

use octa_core::{OccupancyGrid, Point};

/// Legend printed above the rendering.
pub const LEGEND: &str = "S=Start, G=Goal, #=Obstacle, *=Path, .=Empty";

/// A grid rendering with the searched path overlaid.
///
/// Each cell is written as a character followed by a space. Start and goal
/// win over everything else, then obstacles, then path cells.
#[derive(Debug, Clone)]
pub struct PathView<'a> {
    grid: &'a OccupancyGrid,
    start: Point,
    goal: Point,
    path: HashSet<Point>,
}

impl<'a> PathView<'a> {
    pub fn new(grid: &'a OccupancyGrid, start: Point, goal: Point, path: Option<&[Point]>) -> Self {
        Self {
            grid,
            start,
            goal,
            path: path.unwrap_or_default().iter().copied().collect(),
        }
    }

    fn glyph(&self, p: Point, blocked: bool) -> char {
        if p == self.start {
            'S'
        } else if p == self.goal {
            'G'
        } else if blocked {
            '#'
        } else if self.path.contains(&p) {
            '*'
        } else {
            '.'
        }
    }
}

impl fmt::Display for PathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid Visualization:")?;
        writeln!(f, "{LEGEND}")?;
        writeln!(f)?;
        for (p, blocked) in self.grid.iter() {
            write!(f, "{} ", self.glyph(p, blocked))?;
            if p.x == self.grid.size() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
