use std::time::Duration;

/// Per-search performance record, produced for every search including
/// unsuccessful ones.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub path_found: bool,
    /// Number of cells on the path, endpoints included. 0 when not found.
    pub path_length: usize,
    /// Sum of move costs along the path. 0 when not found.
    pub path_cost: i32,
    /// Cells moved from the frontier to the closed set.
    pub nodes_expanded: usize,
    /// Wall-clock time of the search, path reconstruction included.
    pub elapsed: Duration,
    /// The search stopped at the configured expansion limit.
    pub expansion_limit_hit: bool,
}

impl Metrics {
    /// Elapsed time in microseconds.
    #[inline]
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6
    }

    /// Elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    /// Average microseconds per expanded node, or `None` if nothing was
    /// expanded.
    pub fn time_per_node_us(&self) -> Option<f64> {
        if self.nodes_expanded == 0 {
            return None;
        }
        Some(self.elapsed_us() / self.nodes_expanded as f64)
    }

    /// Whether two records agree on everything except timing.
    pub fn same_work(&self, other: &Metrics) -> bool {
        self.path_found == other.path_found
            && self.path_length == other.path_length
            && self.path_cost == other.path_cost
            && self.nodes_expanded == other.nodes_expanded
            && self.expansion_limit_hit == other.expansion_limit_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_timings() {
        let m = Metrics {
            nodes_expanded: 4,
            elapsed: Duration::from_micros(10),
            ..Metrics::default()
        };
        assert!((m.elapsed_us() - 10.0).abs() < 1e-9);
        assert!((m.elapsed_ms() - 0.01).abs() < 1e-12);
        assert!((m.time_per_node_us().unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn no_time_per_node_without_expansions() {
        let m = Metrics {
            elapsed: Duration::from_micros(3),
            ..Metrics::default()
        };
        assert_eq!(m.time_per_node_us(), None);
    }

    #[test]
    fn same_work_ignores_timing() {
        let a = Metrics {
            path_found: true,
            path_length: 8,
            path_cost: 98,
            nodes_expanded: 8,
            elapsed: Duration::from_micros(5),
            expansion_limit_hit: false,
        };
        let b = Metrics {
            elapsed: Duration::from_millis(2),
            ..a
        };
        assert!(a.same_work(&b));
        assert!(!a.same_work(&Metrics { path_cost: 99, ..a }));
    }
}
