use std::fmt;

use octa_core::{OccupancyGrid, Point};
use octa_paths::Metrics;

/// Width of the label column, indent excluded.
const LABEL_WIDTH: usize = 23;

/// Metrics of one search together with the configuration it ran on.
///
/// `Display` writes the block layout the testbench comparison scripts read:
///
/// ```text
/// Test Configuration:
///   Start Position:        (0, 0)
///   ...
/// [METRIC 3] Computation Performance:
///   Time per Node:         0.52 μs/node
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricsReport<'a> {
    grid: &'a OccupancyGrid,
    start: Point,
    goal: Point,
    metrics: &'a Metrics,
}

impl<'a> MetricsReport<'a> {
    pub fn new(grid: &'a OccupancyGrid, start: Point, goal: Point, metrics: &'a Metrics) -> Self {
        Self {
            grid,
            start,
            goal,
            metrics,
        }
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$}{value}")
}

impl fmt::Display for MetricsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;
        let n = self.grid.size();

        writeln!(f, "Test Configuration:")?;
        row(f, "Start Position:", self.start)?;
        row(f, "Goal Position:", self.goal)?;
        row(f, "Grid Size:", format_args!("{n}x{n} ({} nodes)", self.grid.len()))?;
        row(
            f,
            "Obstacles:",
            format_args!(
                "{} ({:.1}%)",
                self.grid.blocked_count(),
                self.grid.density_pct()
            ),
        )?;

        writeln!(f)?;
        writeln!(f, "[METRIC 1] Path Quality:")?;
        row(f, "Path Found:", if m.path_found { "YES" } else { "NO" })?;
        if m.path_found {
            row(f, "Path Length:", format_args!("{} nodes", m.path_length))?;
            row(f, "Path Cost:", m.path_cost)?;
        }

        writeln!(f)?;
        writeln!(f, "[METRIC 2] Algorithm Efficiency:")?;
        row(f, "Nodes Expanded:", m.nodes_expanded)?;
        if m.expansion_limit_hit {
            row(f, "Expansion Limit:", "HIT")?;
        }

        writeln!(f)?;
        writeln!(f, "[METRIC 3] Computation Performance:")?;
        row(f, "Time (μs):", format_args!("{:.2}", m.elapsed_us()))?;
        row(f, "Time (ms):", format_args!("{:.3}", m.elapsed_ms()))?;
        if let Some(per_node) = m.time_per_node_us() {
            row(f, "Time per Node:", format_args!("{per_node:.2} μs/node"))?;
        }
        Ok(())
    }
}
