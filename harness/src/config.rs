//! Command-line configuration for `octa-bench`.

use octa_paths::SearchConfig;
use thiserror::Error;

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: octa-bench [OPTIONS]

Runs the A* reference fixtures and prints testbench-compatible reports.

Options:
  --case <ID>        Run only fixture ID (1-7); repeatable. Default: all
  --random <SEED>    Add a seeded random 16x16 fixture
  --density <P>      Obstacle probability for --random, 0..1 (default 0.3)
  --verify           Cross-check every cost against a Dijkstra oracle
  --trace            Record the expansion order (shown in JSON output)
  --limit <N>        Stop each search after N expansions
  --json             Print one JSON object per fixture instead of text
  --no-grid          Skip the grid visualisation in text output
  --parallel         Run the searches on a thread pool
  -h, --help         Show this help

Environment:
  RUST_LOG           Log filter (default: info)
  OCTA_LOG_FORMAT    Set to `json` for JSON log lines on stderr";

/// Default obstacle probability for random fixtures.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Number of reference fixtures selectable with `--case`.
pub const FIXTURE_COUNT: u32 = 7;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a harness run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Fixture ids to run, in order. Empty means all.
    pub cases: Vec<u32>,
    /// Seed for an extra random fixture.
    pub random_seed: Option<u64>,
    pub density: f64,
    pub verify: bool,
    pub search: SearchConfig,
    pub output: OutputFormat,
    pub show_grid: bool,
    pub parallel: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cases: Vec::new(),
            random_seed: None,
            density: DEFAULT_DENSITY,
            verify: false,
            search: SearchConfig::default(),
            output: OutputFormat::Text,
            show_grid: true,
            parallel: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(HarnessConfig),
    Help,
}

/// Errors in the command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("no fixture with id {0} (expected 1-{FIXTURE_COUNT})")]
    UnknownCase(u32),
    #[error("density {0} is outside 0..1")]
    DensityOutOfRange(f64),
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &'static str) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue(flag))
}

fn parsed<T: std::str::FromStr, I: Iterator<Item = String>>(
    args: &mut I,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let v = value(args, flag)?;
    v.parse()
        .map_err(|_| ArgsError::InvalidValue { flag, value: v })
}

/// Parse command-line arguments (program name excluded).
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, ArgsError> {
    let mut cfg = HarnessConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--case" => {
                let id: u32 = parsed(&mut args, "--case")?;
                if !(1..=FIXTURE_COUNT).contains(&id) {
                    return Err(ArgsError::UnknownCase(id));
                }
                cfg.cases.push(id);
            }
            "--random" => cfg.random_seed = Some(parsed(&mut args, "--random")?),
            "--density" => {
                let d: f64 = parsed(&mut args, "--density")?;
                if !(0.0..=1.0).contains(&d) {
                    return Err(ArgsError::DensityOutOfRange(d));
                }
                cfg.density = d;
            }
            "--limit" => {
                let n: usize = parsed(&mut args, "--limit")?;
                cfg.search = cfg.search.with_expansion_limit(n);
            }
            "--verify" => cfg.verify = true,
            "--trace" => cfg.search = cfg.search.with_trace(),
            "--json" => cfg.output = OutputFormat::Json,
            "--no-grid" => cfg.show_grid = false,
            "--parallel" => cfg.parallel = true,
            _ => return Err(ArgsError::UnknownFlag(arg)),
        }
    }

    Ok(Command::Run(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ArgsError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn run_cfg(args: &[&str]) -> HarnessConfig {
        match parse(args).unwrap() {
            Command::Run(cfg) => cfg,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_runs_everything() {
        assert_eq!(run_cfg(&[]), HarnessConfig::default());
    }

    #[test]
    fn full_command_line() {
        let cfg = run_cfg(&[
            "--case", "3", "--case", "7", "--random", "11", "--density", "0.45", "--verify",
            "--trace", "--limit", "100", "--json", "--no-grid", "--parallel",
        ]);
        assert_eq!(cfg.cases, vec![3, 7]);
        assert_eq!(cfg.random_seed, Some(11));
        assert_eq!(cfg.density, 0.45);
        assert!(cfg.verify);
        assert_eq!(
            cfg.search,
            SearchConfig::default().with_trace().with_expansion_limit(100)
        );
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(!cfg.show_grid);
        assert!(cfg.parallel);
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--json", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse(&["--bogus"]),
            Err(ArgsError::UnknownFlag("--bogus".into()))
        );
        assert_eq!(parse(&["--case"]), Err(ArgsError::MissingValue("--case")));
        assert_eq!(parse(&["--case", "9"]), Err(ArgsError::UnknownCase(9)));
        assert_eq!(
            parse(&["--limit", "many"]),
            Err(ArgsError::InvalidValue {
                flag: "--limit",
                value: "many".into()
            })
        );
        assert_eq!(
            parse(&["--density", "1.5"]),
            Err(ArgsError::DensityOutOfRange(1.5))
        );
    }
}
