//! Runs fixtures through the pathfinder and writes the results.

use std::io::{self, Write};

use octa_core::Point;
use octa_fixtures::{Fixture, GRID_SIZE, seeded_fixture};
use octa_paths::{
    DIAGONAL_COST, GridPather, Metrics, Pathfinder, STRAIGHT_COST, SearchError, SearchReport,
    cost_map,
};
use octa_report::{MetricsReport, PathView};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::HarnessConfig;

const RULE: &str = "======================================================================";

/// One fixture together with its search report.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub fixture: Fixture,
    pub report: SearchReport,
    /// Exact cost from the Dijkstra oracle, when verification ran.
    /// The inner `None` means the oracle found the goal unreachable.
    pub oracle: Option<Option<i32>>,
}

impl CaseOutcome {
    /// Whether A* disagrees with the oracle. Always `false` without
    /// verification or when an expansion limit cut the search short.
    pub fn mismatch(&self) -> bool {
        let Some(oracle) = self.oracle else {
            return false;
        };
        if self.report.metrics.expansion_limit_hit {
            return false;
        }
        let astar = self
            .report
            .result
            .is_found()
            .then_some(self.report.metrics.path_cost);
        astar != oracle
    }
}

/// The fixtures a configuration selects, in run order.
pub fn select_fixtures(cfg: &HarnessConfig) -> Vec<Fixture> {
    let mut fixtures: Vec<Fixture> = if cfg.cases.is_empty() {
        octa_fixtures::all()
    } else {
        cfg.cases
            .iter()
            .filter_map(|&id| octa_fixtures::by_id(id))
            .collect()
    };
    if let Some(seed) = cfg.random_seed {
        fixtures.push(seeded_fixture(seed, GRID_SIZE, cfg.density));
    }
    fixtures
}

/// Search one fixture, and cross-check it if `verify` is set.
pub fn run_case(
    pf: &Pathfinder,
    fixture: Fixture,
    verify: bool,
) -> Result<CaseOutcome, SearchError> {
    let report = pf.find_path(&fixture.grid, fixture.start, fixture.goal)?;
    let oracle =
        verify.then(|| cost_map(&GridPather::new(&fixture.grid), fixture.start).at(fixture.goal));
    tracing::debug!(
        id = fixture.id,
        found = report.metrics.path_found,
        cost = report.metrics.path_cost,
        expanded = report.metrics.nodes_expanded,
        "case finished"
    );
    Ok(CaseOutcome {
        fixture,
        report,
        oracle,
    })
}

/// Run every selected fixture. Results keep fixture order even when the
/// searches run on the rayon pool.
pub fn run_all(cfg: &HarnessConfig) -> Result<Vec<CaseOutcome>, SearchError> {
    let fixtures = select_fixtures(cfg);
    let pf = Pathfinder::with_config(cfg.search.clone());
    tracing::info!(
        cases = fixtures.len(),
        parallel = cfg.parallel,
        verify = cfg.verify,
        "running fixtures"
    );

    if cfg.parallel {
        fixtures
            .into_par_iter()
            .map(|f| run_case(&pf, f, cfg.verify))
            .collect()
    } else {
        fixtures
            .into_iter()
            .map(|f| run_case(&pf, f, cfg.verify))
            .collect()
    }
}

/// Outcomes that disagree with the oracle.
pub fn mismatches(outcomes: &[CaseOutcome]) -> Vec<&CaseOutcome> {
    outcomes.iter().filter(|o| o.mismatch()).collect()
}

fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "RUST A* PATHFINDING - 8-CONNECTED")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Grid Size: {GRID_SIZE}x{GRID_SIZE}")?;
    writeln!(out, "Costs: Straight={STRAIGHT_COST}, Diagonal={DIAGONAL_COST}")?;
    writeln!(out, "Heuristic: Octile Distance")?;
    writeln!(out)
}

/// Write the human-readable report for every outcome.
pub fn write_text(
    out: &mut impl Write,
    cfg: &HarnessConfig,
    outcomes: &[CaseOutcome],
) -> io::Result<()> {
    write_banner(out)?;

    for o in outcomes {
        let f = &o.fixture;
        let m = &o.report.metrics;
        writeln!(out, "{RULE}")?;
        writeln!(out, "TEST CASE {}: {}", f.id, f.name)?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        write!(out, "{}", MetricsReport::new(&f.grid, f.start, f.goal, m))?;

        if let Some(oracle) = o.oracle {
            let shown = oracle.map_or_else(|| "unreachable".to_string(), |c| c.to_string());
            let verdict = if o.mismatch() { "MISMATCH" } else { "OK" };
            writeln!(out)?;
            writeln!(out, "[VERIFY] Oracle cost: {shown} ... {verdict}")?;
        }

        if cfg.show_grid {
            writeln!(out)?;
            write!(
                out,
                "{}",
                PathView::new(&f.grid, f.start, f.goal, o.report.result.path())
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "ALL TEST CASES COMPLETE")?;
    writeln!(out, "{RULE}")
}

/// One JSON line per fixture.
#[derive(Debug, Serialize)]
struct CaseRecord<'a> {
    id: u32,
    name: &'a str,
    start: Point,
    goal: Point,
    grid_size: i32,
    obstacles: usize,
    metrics: &'a Metrics,
    elapsed_us: f64,
    time_per_node_us: Option<f64>,
    path: Option<&'a [Point]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expansions: Option<&'a [Point]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oracle_cost: Option<Option<i32>>,
}

impl<'a> From<&'a CaseOutcome> for CaseRecord<'a> {
    fn from(o: &'a CaseOutcome) -> Self {
        let f = &o.fixture;
        let m = &o.report.metrics;
        Self {
            id: f.id,
            name: &f.name,
            start: f.start,
            goal: f.goal,
            grid_size: f.grid.size(),
            obstacles: f.grid.blocked_count(),
            metrics: m,
            elapsed_us: m.elapsed_us(),
            time_per_node_us: m.time_per_node_us(),
            path: o.report.result.path(),
            expansions: o.report.expansions.as_deref(),
            oracle_cost: o.oracle,
        }
    }
}

/// Write one JSON object per line, in outcome order.
pub fn write_json(out: &mut impl Write, outcomes: &[CaseOutcome]) -> io::Result<()> {
    for o in outcomes {
        serde_json::to_writer(&mut *out, &CaseRecord::from(o))?;
        writeln!(out)?;
    }
    Ok(())
}
