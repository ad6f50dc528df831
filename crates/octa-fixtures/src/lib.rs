//! Obstacle layouts for exercising the A* reference model.
//!
//! Provides the seven named 16×16 conformance fixtures ([`cases`]) and
//! seeded random layouts ([`random`]).

pub mod cases;
pub mod lcg;
pub mod random;

pub use cases::{Fixture, GRID_SIZE, all, by_id};
pub use lcg::Lcg;
pub use random::{random_fixture, random_grid, seeded_fixture};
