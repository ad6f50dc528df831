//! The seven named conformance layouts.
//!
//! Every builder returns a 16×16 [`Fixture`]. Layouts are written in
//! (row, col) terms where that reads closer to the drawings they came from;
//! row is `y` and col is `x`.

use octa_core::{OccupancyGrid, Point};

use crate::lcg::Lcg;

/// Side length of every reference layout.
pub const GRID_SIZE: i32 = 16;

/// A named start/goal/obstacle configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixture {
    pub id: u32,
    pub name: String,
    pub grid: OccupancyGrid,
    pub start: Point,
    pub goal: Point,
}

impl Fixture {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        grid: OccupancyGrid,
        start: Point,
        goal: Point,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            grid,
            start,
            goal,
        }
    }
}

/// Small helper so layouts can be written in (row, col) order.
struct Layout(OccupancyGrid);

impl Layout {
    fn new() -> Self {
        Self(OccupancyGrid::new(GRID_SIZE))
    }

    fn block(&mut self, row: i32, col: i32) {
        self.0.set_blocked(Point::new(col, row), true);
    }

    fn clear(&mut self, row: i32, col: i32) {
        self.0.set_blocked(Point::new(col, row), false);
    }
}

/// 1: empty grid, (0, 0) → (7, 7).
pub fn simple_diagonal() -> Fixture {
    Fixture::new(
        1,
        "Simple diagonal path",
        OccupancyGrid::new(GRID_SIZE),
        Point::new(0, 0),
        Point::new(7, 7),
    )
}

/// 2: nested rectangular walls with one gap each, (1, 1) → (14, 14).
pub fn spiral_maze() -> Fixture {
    let mut l = Layout::new();
    for i in 2..14 {
        l.block(3, i);
        l.block(12, i);
        l.block(i, 3);
        l.block(i, 12);
    }
    for i in 5..11 {
        l.block(6, i);
        l.block(9, i);
    }
    for i in 6..10 {
        l.block(i, 6);
        l.block(i, 10);
    }
    l.clear(3, 8);
    l.clear(6, 10);
    l.clear(9, 6);
    Fixture::new(2, "Spiral maze", l.0, Point::new(1, 1), Point::new(14, 14))
}

/// 3: ~30 % obstacles from [`Lcg`] seed 42, (1, 1) → (14, 14).
///
/// Cells are visited column by column (x outer, y inner). The generator
/// advances for every cell, including the two endpoints that are kept free.
pub fn dense_random() -> Fixture {
    let start = Point::new(1, 1);
    let goal = Point::new(14, 14);
    let mut grid = OccupancyGrid::new(GRID_SIZE);
    let mut lcg = Lcg::new(42);
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let r = lcg.next();
            let p = Point::new(x, y);
            if p != start && p != goal && r % 100 < 30 {
                grid.set_blocked(p, true);
            }
        }
    }
    Fixture::new(3, "Dense random obstacles", grid, start, goal)
}

/// 4: horizontal walls with alternating end gaps, (0, 0) → (15, 15).
pub fn snake() -> Fixture {
    let mut l = Layout::new();
    for row in (2..GRID_SIZE).step_by(3) {
        for col in 0..GRID_SIZE - 1 {
            l.block(row, col);
        }
    }
    for row in (4..GRID_SIZE).step_by(3) {
        for col in 1..GRID_SIZE {
            l.block(row, col);
        }
    }
    Fixture::new(4, "Snake pattern", l.0, Point::new(0, 0), Point::new(15, 15))
}

/// 5: four walled rooms joined by doorways, (2, 2) → (13, 13).
pub fn rooms_and_corridors() -> Fixture {
    let mut l = Layout::new();
    for i in 1..6 {
        l.block(1, i);
        l.block(6, i);
        l.block(i, 1);
        l.block(i, 6);
    }
    for i in 9..14 {
        l.block(1, i);
        l.block(6, i);
        l.block(i, 9);
        l.block(i, 14);
    }
    for i in 1..6 {
        l.block(9, i);
        l.block(14, i);
        l.block(i, 1);
        l.block(i, 6);
    }
    for i in 9..14 {
        l.block(9, i);
        l.block(14, i);
        l.block(i, 9);
        l.block(i, 14);
    }
    for (row, col) in [(3, 6), (3, 9), (6, 3), (9, 3), (11, 6), (11, 9)] {
        l.clear(row, col);
    }
    Fixture::new(5, "Rooms and corridors", l.0, Point::new(2, 2), Point::new(13, 13))
}

/// 6: a three-cell-wide band along the main diagonal, (0, 0) → (15, 15).
pub fn diagonal_corridor() -> Fixture {
    let grid = OccupancyGrid::from_fn(GRID_SIZE, |p| (p.x - p.y).abs() > 1);
    Fixture::new(
        6,
        "Long diagonal corridor",
        grid,
        Point::new(0, 0),
        Point::new(15, 15),
    )
}

/// 7: row 7 fully blocked, so (0, 0) → (15, 15) has no path.
pub fn complete_wall() -> Fixture {
    let grid = OccupancyGrid::from_fn(GRID_SIZE, |p| p.y == 7);
    Fixture::new(
        7,
        "No path (complete wall)",
        grid,
        Point::new(0, 0),
        Point::new(15, 15),
    )
}

/// All reference fixtures, in id order.
pub fn all() -> Vec<Fixture> {
    vec![
        simple_diagonal(),
        spiral_maze(),
        dense_random(),
        snake(),
        rooms_and_corridors(),
        diagonal_corridor(),
        complete_wall(),
    ]
}

/// The reference fixture with the given id, if any.
pub fn by_id(id: u32) -> Option<Fixture> {
    let builder: fn() -> Fixture = match id {
        1 => simple_diagonal,
        2 => spiral_maze,
        3 => dense_random,
        4 => snake,
        5 => rooms_and_corridors,
        6 => diagonal_corridor,
        7 => complete_wall,
        _ => return None,
    };
    Some(builder())
}
