//! **octa-core**: core types for the octile A* reference model.
//!
//! This crate provides the geometry primitives and the square occupancy grid
//! shared by the search engine, the fixture builders and the reporters.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{BLOCKED_CHAR, FREE_CHAR, OccupancyGrid};
