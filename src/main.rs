//! Command-line planning runner: stop list JSON in, plan report JSON out.
//!
//! The first stop in the input file is the depot. Example input:
//!
//! ```json
//! [
//!   {"id": "4636_KRT", "latitude": 22.4988249, "longitude": 88.3837203, "address": "Kolkata"},
//!   {"id": "4636_BBR", "latitude": 22.5726723, "longitude": 88.3638815, "address": "Howrah"}
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::info;

use beat_plan::config::Config;
use beat_plan::error::{Result, SolveError};
use beat_plan::problem::{Problem, Stop};
use beat_plan::report::PlanReport;
use beat_plan::solution::RoutePlan;
use beat_plan::RouteSolver;

/// Sequence a list of stops into the shortest closed visiting order.
#[derive(Parser, Debug)]
#[command(name = "beat_plan", version, about)]
struct Args {
    /// JSON file with the stop list; the first stop is the depot.
    input: PathBuf,

    /// Wall-clock search budget in seconds.
    #[arg(long, default_value_t = 900)]
    time_limit: u64,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let report = run(&args);
    let encoded = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match encoded {
        Ok(text) => println!("{}", text),
        Err(error) => {
            eprintln!("failed to encode report: {}", error);
            return ExitCode::FAILURE;
        }
    }

    if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(args: &Args) -> PlanReport {
    let mut config = Config::new().with_time_limit(Duration::from_secs(args.time_limit));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let outcome = read_stops(&args.input)
        .and_then(Problem::new)
        .and_then(|problem| {
            let mut solver = RouteSolver::new(problem, config)?;
            let tour = solver.run()?;
            let plan = RoutePlan::from_tour(&tour, &solver.problem)?;
            if let Some(stats) = solver.statistics() {
                info!("{}", stats.format());
            }
            Ok((plan, solver.time_limit_reached))
        });

    match outcome {
        Ok((plan, time_limit_reached)) => PlanReport::success(plan, time_limit_reached),
        Err(error) => PlanReport::failure(&error),
    }
}

fn read_stops(path: &Path) -> Result<Vec<Stop>> {
    let text = fs::read_to_string(path).map_err(|error| {
        SolveError::invalid_input(format!("cannot read {}: {}", path.display(), error))
    })?;
    serde_json::from_str(&text).map_err(|error| {
        SolveError::invalid_input(format!("cannot parse {}: {}", path.display(), error))
    })
}
