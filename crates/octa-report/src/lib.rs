//! Text output for A* searches, laid out to line up with the hardware
//! testbench logs.
//!
//! - [`MetricsReport`]: configuration and the three metric blocks.
//! - [`PathView`]: one token per cell showing start, goal, obstacles and
//!   the path.

mod metrics;
mod visual;

pub use metrics::MetricsReport;
pub use visual::PathView;
