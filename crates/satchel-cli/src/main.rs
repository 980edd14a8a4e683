// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `satchel`: solve a 0/1 knapsack instance from the command line.
//!
//! Reads the item list and the capacity from two text files (by default
//! `input_data.txt` and `input_max_cap.txt` in the working directory),
//! solves to optimality and prints `Maximum profit is <value>`. Diagnostics
//! go to stderr through `tracing`; input errors exit with status 1.

use clap::Parser;
use satchel_bnb::{
    bnb::BnbSolver,
    frontier::FrontierKind,
    monitor::{log::LogTreeSearchMonitor, node_limit::NodeLimitMonitor, wrapper::WrapperMonitor},
};
use satchel_model::{
    loading::{DEFAULT_CAPACITY_FILE, DEFAULT_ITEMS_FILE, ProblemLoader, ProblemLoaderError},
    problem::Problem,
};
use satchel_search::{
    monitor::time_limit::TimeLimitMonitor,
    result::{SolverResult, TerminationReason},
};
use satchel_solver::solver::SolverBuilder;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing_subscriber::EnvFilter;

type IntegerType = i64;

#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(about = "Exact 0/1 knapsack solver using branch-and-bound")]
struct Args {
    /// File with whitespace separated `weight value` pairs
    #[arg(long, default_value = DEFAULT_ITEMS_FILE)]
    items: PathBuf,

    /// File holding the knapsack capacity
    #[arg(long, default_value = DEFAULT_CAPACITY_FILE)]
    capacity_file: PathBuf,

    /// Capacity to use instead of reading the capacity file
    #[arg(long, allow_hyphen_values = true)]
    capacity: Option<IntegerType>,

    /// Order in which live nodes are expanded: fifo, lifo or best-first
    #[arg(long, default_value_t = FrontierKind::BestFirst)]
    frontier: FrontierKind,

    /// Stop after this many seconds and report the best selection found
    #[arg(long, allow_hyphen_values = true)]
    time_limit: Option<f64>,

    /// Stop after expanding this many nodes
    #[arg(long)]
    node_limit: Option<u64>,

    /// Run every frontier discipline in parallel against a shared incumbent
    #[arg(long)]
    portfolio: bool,

    /// Print a periodic progress table
    #[arg(long)]
    progress: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the chosen items
    #[arg(long)]
    show_selection: bool,
}

#[derive(Debug)]
enum CliError {
    Load(ProblemLoaderError),
    InvalidTimeLimit(f64),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Load(e) => write!(f, "failed to load the instance: {}", e),
            CliError::InvalidTimeLimit(secs) => write!(
                f,
                "invalid time limit {}: expected a non-negative number of seconds",
                secs
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Load(e) => Some(e),
            CliError::InvalidTimeLimit(_) => None,
        }
    }
}

impl From<ProblemLoaderError> for CliError {
    fn from(e: ProblemLoaderError) -> Self {
        CliError::Load(e)
    }
}

/// What the CLI prints, independent of how the instance was solved.
#[derive(Debug)]
struct Report {
    result: SolverResult<IntegerType>,
    reason: TerminationReason,
    statistics: String,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_problem(args: &Args) -> Result<Problem<IntegerType>, CliError> {
    let mut loader = ProblemLoader::<IntegerType>::new();
    if let Some(capacity) = args.capacity {
        loader = loader.with_capacity(capacity);
    }
    Ok(loader.from_paths(&args.items, &args.capacity_file)?)
}

fn time_limit(args: &Args) -> Result<Option<Duration>, CliError> {
    args.time_limit
        .map(|secs| Duration::try_from_secs_f64(secs).map_err(|_| CliError::InvalidTimeLimit(secs)))
        .transpose()
}

fn solve_single(args: &Args, problem: &Problem<IntegerType>, limit: Option<Duration>) -> Report {
    let mut time_limit_monitor = limit.map(TimeLimitMonitor::<IntegerType>::new);

    let monitor = (
        time_limit_monitor.as_mut().map(|m| WrapperMonitor::new(m)),
        (
            args.node_limit.map(NodeLimitMonitor::new),
            args.progress.then(LogTreeSearchMonitor::default),
        ),
    );

    let outcome = BnbSolver::with_frontier(args.frontier).solve(problem, monitor);
    Report {
        result: outcome.result().clone(),
        reason: outcome.termination_reason().clone(),
        statistics: outcome.statistics().to_string(),
    }
}

fn solve_portfolio(args: &Args, problem: &Problem<IntegerType>, limit: Option<Duration>) -> Report {
    if args.progress {
        tracing::warn!("--progress is not available with --portfolio; ignoring it");
    }

    let mut builder = SolverBuilder::<IntegerType>::new();
    if let Some(limit) = limit {
        builder = builder.with_time_limit(limit);
    }
    if let Some(limit) = args.node_limit {
        builder = builder.with_node_limit(limit);
    }
    let mut solver = builder.with_default_portfolio().build();

    let outcome = solver.solve(problem);
    Report {
        statistics: outcome.statistics.to_string(),
        result: outcome.result,
        reason: outcome.reason,
    }
}

fn run(args: &Args) -> Result<Report, CliError> {
    let limit = time_limit(args)?;
    let problem = load_problem(args)?;
    tracing::info!(
        "loaded {} items with capacity {}",
        problem.num_items(),
        problem.capacity()
    );

    let report = if args.portfolio {
        solve_portfolio(args, &problem, limit)
    } else {
        tracing::debug!("solving with {} frontier", args.frontier);
        solve_single(args, &problem, limit)
    };

    tracing::debug!("{}", report.statistics);
    Ok(report)
}

fn print_report(report: &Report, show_selection: bool) {
    println!("Maximum profit is {}", report.result.objective_value());
    if let TerminationReason::Aborted(reason) = &report.reason {
        println!(
            "Search stopped early ({}); this is the best profit found, not a proven optimum.",
            reason
        );
    }
    if show_selection {
        print!("{}", report.result.selection());
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(report) => {
            print_report(&report, args.show_selection);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::error::{InvalidItemReason, ModelError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        write!(file, "{}", content).expect("write temp file");
        file
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["satchel"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_defaults_need_no_flags() {
        let args = args(&[]);
        assert_eq!(args.items, PathBuf::from(DEFAULT_ITEMS_FILE));
        assert_eq!(args.capacity_file, PathBuf::from(DEFAULT_CAPACITY_FILE));
        assert_eq!(args.frontier, FrontierKind::BestFirst);
        assert!(args.capacity.is_none());
        assert!(!args.portfolio);
    }

    #[test]
    fn test_unknown_frontier_is_rejected() {
        assert!(Args::try_parse_from(["satchel", "--frontier", "random"]).is_err());
    }

    #[test]
    fn test_solves_from_files_with_every_mode() {
        let items = write_file("10 60\n20 100\n30 120\n");
        let capacity = write_file("50\n");
        let items_path = items.path().to_str().expect("utf-8 path");
        let capacity_path = capacity.path().to_str().expect("utf-8 path");

        for mode in [
            vec!["--frontier", "fifo"],
            vec!["--frontier", "lifo"],
            vec!["--frontier", "best-first"],
            vec!["--portfolio"],
        ] {
            let mut argv = vec!["--items", items_path, "--capacity-file", capacity_path];
            argv.extend(mode);
            let report = run(&args(&argv)).expect("solvable instance");
            assert_eq!(report.result.objective_value(), 220);
            assert_eq!(report.reason, TerminationReason::OptimalityProven);
        }
    }

    #[test]
    fn test_capacity_flag_overrides_missing_file() {
        let items = write_file("2 3\n3 4\n4 5\n5 6\n");
        let argv = [
            "--items",
            items.path().to_str().expect("utf-8 path"),
            "--capacity-file",
            "/nonexistent/capacity.txt",
            "--capacity",
            "5",
        ];
        let report = run(&args(&argv)).expect("solvable instance");
        assert_eq!(report.result.objective_value(), 7);
    }

    #[test]
    fn test_missing_item_file_is_an_error() {
        let capacity = write_file("50");
        let argv = [
            "--items",
            "/nonexistent/items.txt",
            "--capacity-file",
            capacity.path().to_str().expect("utf-8 path"),
        ];
        assert!(matches!(
            run(&args(&argv)),
            Err(CliError::Load(ProblemLoaderError::ItemSourceUnavailable { .. }))
        ));
    }

    #[test]
    fn test_invalid_item_and_capacity_are_errors() {
        let items = write_file("0 10\n");
        let argv = ["--items", items.path().to_str().expect("utf-8 path"), "--capacity", "5"];
        match run(&args(&argv)) {
            Err(CliError::Load(ProblemLoaderError::Model(ModelError::InvalidItem(e)))) => {
                assert_eq!(e.reason, InvalidItemReason::NonPositiveWeight);
            }
            other => panic!("expected InvalidItem, got {:?}", other),
        }

        let items = write_file("10 10\n");
        let argv = ["--items", items.path().to_str().expect("utf-8 path"), "--capacity", "-1"];
        assert!(matches!(
            run(&args(&argv)),
            Err(CliError::Load(ProblemLoaderError::Model(
                ModelError::InvalidCapacity { .. }
            )))
        ));
    }

    #[test]
    fn test_negative_time_limit_is_rejected() {
        let argv = ["--time-limit", "-1", "--capacity", "5"];
        let parsed = Args::try_parse_from(std::iter::once("satchel").chain(argv))
            .expect("clap accepts the number");
        assert!(matches!(
            run(&parsed),
            Err(CliError::InvalidTimeLimit(_))
        ));
    }

    #[test]
    fn test_zero_time_limit_reports_best_effort() {
        let items = write_file("10 60\n20 100\n30 120\n");
        let argv = [
            "--items",
            items.path().to_str().expect("utf-8 path"),
            "--capacity",
            "50",
            "--time-limit",
            "0",
        ];
        let report = run(&args(&argv)).expect("solvable instance");
        assert!(matches!(report.result, SolverResult::Feasible(_)));
        assert!(matches!(report.reason, TerminationReason::Aborted(_)));
    }
}
