//! Square binary occupancy grid.
//!
//! [`OccupancyGrid`] stores one `bool` per cell (`true` = blocked) in
//! row-major order. Searches borrow it immutably; builders mutate it
//! beforehand through [`OccupancyGrid::set_blocked`].

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Text marker for a blocked cell.
pub const BLOCKED_CHAR: char = '#';
/// Text marker for a free cell.
pub const FREE_CHAR: char = '.';

/// An N×N occupancy map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an `size`×`size` grid with every cell free.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            size,
            cells: vec![false; (size as usize) * (size as usize)],
        }
    }

    /// Create a grid where `blocked(p)` decides the occupancy of each cell.
    pub fn from_fn(size: i32, mut blocked: impl FnMut(Point) -> bool) -> Self {
        let mut g = Self::new(size);
        for (i, p) in g.bounds().iter().enumerate() {
            g.cells[i] = blocked(p);
        }
        g
    }

    /// Parse a grid from rows of `#` (blocked) and `.` (free).
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line. Every row must have the same width and the layout must be
    /// square.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if rows.first().is_none_or(|r| r.is_empty()) {
            return Err(GridError::Empty);
        }

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let blocked = match ch {
                    BLOCKED_CHAR => true,
                    FREE_CHAR => false,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(blocked);
            }
        }
        if width != rows.len() {
            return Err(GridError::NotSquare {
                width,
                height: rows.len(),
            });
        }

        Ok(Self {
            size: width as i32,
            cells,
        })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid rectangle `[0, N) × [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Occupancy at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<bool> {
        self.bounds().index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` is blocked. Out-of-bounds points count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).unwrap_or(true)
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(false)
    }

    /// Set the occupancy at `p`. Does nothing if out of bounds.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.bounds().index_of(p) {
            self.cells[i] = blocked;
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Percentage of blocked cells, `0.0` for an empty grid.
    pub fn density_pct(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.blocked_count() as f64 * 100.0 / self.cells.len() as f64
    }

    /// Iterate over `(Point, blocked)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, blocked) in self.iter() {
            if p.x == 0 && p.y > 0 {
                writeln!(f)?;
            }
            let ch = if blocked { BLOCKED_CHAR } else { FREE_CHAR };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

// Grids serialize as their text layout so snapshots stay human-readable.
#[cfg(feature = "serde")]
impl serde::Serialize for OccupancyGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = self.to_string().lines().map(str::to_owned).collect();
        rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OccupancyGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        OccupancyGrid::from_ascii(&rows.join("\n")).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = OccupancyGrid::from_fn(5, |p| (p.x + p.y) % 3 == 0);
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.starts_with("[\"#..#.\""));
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_rejects_bad_layout() {
        let res: Result<OccupancyGrid, _> = serde_json::from_str("[\"..\", \".\"]");
        assert!(res.is_err());
    }
}
