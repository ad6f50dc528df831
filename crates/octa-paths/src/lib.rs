//! 8-connected A* on occupancy grids, with an integer octile cost model.
//!
//! Straight moves cost 10 and diagonal moves 14; the heuristic is the
//! octile distance ([`octile`]), which is admissible and consistent for those
//! costs. The frontier breaks f-score ties by insertion order, so two runs on
//! the same input expand the same cells in the same order. A
//! hardware implementation is checked against that order.
//!
//! - **A\*** search with metrics ([`Pathfinder::find_path`], [`find_path`])
//! - **Dijkstra** exact cost maps, used as an oracle ([`cost_map`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`GridPather`] implements both for an [`OccupancyGrid`](octa_core::OccupancyGrid).

mod astar;
mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod metrics;
mod neighbors;
mod pather;
mod result;
mod state;
mod traits;

pub use astar::{Pathfinder, find_path};
pub use config::SearchConfig;
pub use dijkstra::{CostMap, cost_map};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use error::{Endpoint, SearchError};
pub use metrics::Metrics;
pub use neighbors::{OCTILE_MOVES, Step, octile_neighbors};
pub use pather::GridPather;
pub use result::{PathResult, SearchReport};
pub use traits::{AstarPather, Pather};
