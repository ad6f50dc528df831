//! Seeded random layouts for property tests and ad-hoc harness runs.

use octa_core::{OccupancyGrid, Point};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::cases::Fixture;

/// Id given to generated fixtures; the reference layouts use 1..=7.
pub const RANDOM_FIXTURE_ID: u32 = 0;

/// Fill a `size`×`size` grid, blocking each cell with probability
/// `density` (clamped to `[0, 1]`).
pub fn random_grid(rng: &mut impl Rng, size: i32, density: f64) -> OccupancyGrid {
    let density = density.clamp(0.0, 1.0);
    OccupancyGrid::from_fn(size, |_| rng.random_bool(density))
}

/// A random grid with uniformly chosen start and goal, both forced free.
///
/// `size` must be positive.
pub fn random_fixture(rng: &mut impl Rng, size: i32, density: f64) -> Fixture {
    let mut grid = random_grid(rng, size, density);
    let start = Point::new(rng.random_range(0..size), rng.random_range(0..size));
    let goal = Point::new(rng.random_range(0..size), rng.random_range(0..size));
    grid.set_blocked(start, false);
    grid.set_blocked(goal, false);
    Fixture::new(
        RANDOM_FIXTURE_ID,
        format!("Random obstacles ({:.0}%)", density.clamp(0.0, 1.0) * 100.0),
        grid,
        start,
        goal,
    )
}

/// [`random_fixture`] driven by a `StdRng` seeded with `seed`.
pub fn seeded_fixture(seed: u64, size: i32, density: f64) -> Fixture {
    let mut rng = StdRng::seed_from_u64(seed);
    random_fixture(&mut rng, size, density)
}
