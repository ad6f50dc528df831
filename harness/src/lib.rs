//! Conformance harness for the octile A* reference model.
//!
//! Runs the reference fixtures (and optionally a seeded random one) through
//! [`octa_paths::Pathfinder`] and prints the metrics block and path map that
//! hardware runs are compared against, or JSON lines with the same data.

pub mod config;
pub mod run;

pub use config::{ArgsError, Command, HarnessConfig, OutputFormat, USAGE, parse_args};
pub use run::{CaseOutcome, mismatches, run_all, run_case, select_fixtures, write_json, write_text};
