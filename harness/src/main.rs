use std::process::ExitCode;

use octa_harness::{Command, OutputFormat, USAGE, mismatches, parse_args, run_all, write_json, write_text};

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays a clean report.
    if std::env::var("OCTA_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() -> ExitCode {
    let cfg = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(cfg)) => cfg,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    init_logging();

    let outcomes = match run_all(&cfg) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::error!(error = %e, "fixture rejected by the pathfinder");
            return ExitCode::FAILURE;
        }
    };

    let mut out = std::io::stdout().lock();
    let written = match cfg.output {
        OutputFormat::Text => write_text(&mut out, &cfg, &outcomes),
        OutputFormat::Json => write_json(&mut out, &outcomes),
    };
    if let Err(e) = written {
        tracing::error!(error = %e, "failed to write results");
        return ExitCode::FAILURE;
    }

    let bad = mismatches(&outcomes);
    if !bad.is_empty() {
        for o in &bad {
            tracing::error!(
                id = o.fixture.id,
                name = %o.fixture.name,
                astar = o.report.metrics.path_cost,
                oracle = ?o.oracle,
                "A* cost disagrees with the Dijkstra oracle"
            );
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
