use octa_core::Point;

use crate::metrics::Metrics;

/// Outcome of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// Cells from start to goal inclusive, and the summed move cost.
    Found { path: Vec<Point>, cost: i32 },
    /// The goal cannot be reached (or the expansion limit was hit first).
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound => None,
        }
    }

    /// Path cost, 0 when not found.
    pub fn cost(&self) -> i32 {
        match self {
            Self::Found { cost, .. } => *cost,
            Self::NotFound => 0,
        }
    }

    /// Number of cells on the path, 0 when not found.
    pub fn path_length(&self) -> usize {
        self.path().map_or(0, <[Point]>::len)
    }

    /// `size`×`size` matrix indexed `[y][x]` with 1 on path cells and 0
    /// elsewhere. All zeros when not found.
    pub fn path_map(&self, size: i32) -> Vec<Vec<u8>> {
        let n = size.max(0) as usize;
        let mut map = vec![vec![0u8; n]; n];
        for p in self.path().unwrap_or_default() {
            if (0..size).contains(&p.x) && (0..size).contains(&p.y) {
                map[p.y as usize][p.x as usize] = 1;
            }
        }
        map
    }
}

/// Everything a search produces: the path outcome, its metrics and, when
/// requested, the expansion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub result: PathResult,
    pub metrics: Metrics,
    /// Cells in the order they were closed. `None` unless
    /// [`SearchConfig::record_expansions`](crate::SearchConfig::record_expansions)
    /// was set.
    pub expansions: Option<Vec<Point>>,
}
