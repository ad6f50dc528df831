use std::fmt;

use octa_core::{Point, Range};
use thiserror::Error;

/// Which end of the requested path an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid search input, rejected before any cell is expanded.
///
/// An unreachable goal is not an error; it is reported as
/// [`PathResult::NotFound`](crate::PathResult::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The endpoint lies outside the searchable area.
    #[error("{endpoint} {point} is outside the grid {bounds}")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        bounds: Range,
    },
    /// The endpoint is an obstacle.
    #[error("{endpoint} {point} is blocked")]
    Blocked { endpoint: Endpoint, point: Point },
}
