use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when building an [`OccupancyGrid`](crate::OccupancyGrid)
/// from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contained no rows.
    #[error("grid: empty layout")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Occupancy grids are square; this layout is not.
    #[error("grid: layout is {width}x{height}, expected a square")]
    NotSquare { width: usize, height: usize },
    /// A character other than the free/blocked markers was found.
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
