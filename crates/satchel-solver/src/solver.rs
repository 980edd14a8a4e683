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

//! # Portfolio-Orchestrated Solver
//!
//! A high-level orchestrator that runs multiple solver strategies in parallel,
//! manages a shared incumbent, and enforces global termination criteria via
//! pluggable monitors (time limit, solution count, stop signal).
//!
//! ## Highlights
//!
//! - Portfolio execution:
//!   - Spawn each `PortfolioSolver<T>` in a thread using `std::thread::scope`.
//!   - Build a `CompositeMonitor<T>` per thread with the solution-count and
//!     optional time-limit monitors. The shared stop signal travels in the
//!     `PortfolioSolverContext`.
//! - Shared state:
//!   - `SharedIncumbent<T>` stores the best selection (atomic lower bound +
//!     mutex snapshot). It is reset at the start of every solve.
//!   - Global counter (`AtomicU64`) for improving selections; `AtomicBool`
//!     stop signal raised once a worker proves optimality.
//! - Outcome construction:
//!   - The best selection of all workers and the shared incumbent is
//!     reported. It is `Optimal` if any worker exhausted its frontier,
//!     `Feasible` otherwise.
//! - Builder pattern:
//!   - `SolverBuilder` configures solution/time limits and the portfolio.
//!     Without explicit workers it runs one branch-and-bound worker per
//!     frontier discipline.
//!
//! ## Usage
//!
//! ```rust
//! use satchel_model::problem::Problem;
//! use satchel_solver::solver::SolverBuilder;
//!
//! let problem = Problem::<i64>::from_pairs(&[(10, 60), (20, 100), (30, 120)], 50).unwrap();
//! let mut solver = SolverBuilder::<i64>::new()
//!     .with_time_limit(std::time::Duration::from_secs(30))
//!     .build();
//!
//! let outcome = solver.solve(&problem);
//! assert!(outcome.is_optimal());
//! assert_eq!(outcome.objective_value(), 220);
//! ```

use satchel_bnb::{frontier::FrontierKind, portfolio::BnbPortfolioSolver};
use satchel_model::{problem::Problem, selection::Selection};
use satchel_search::{
    incumbent::SharedIncumbent,
    monitor::{composite::CompositeMonitor, solution::SolutionMonitor, time_limit::TimeLimitMonitor},
    num::SolverNumeric,
    portfolio::{PortfolioSolver, PortfolioSolverContext, PortfolioSolverResult},
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::{SolverStatistics, WorkerStatistics},
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub struct Solver<'a, T> {
    portfolio_solver: Vec<Box<dyn PortfolioSolver<T> + 'a>>,
    incumbent: SharedIncumbent<T>,
    global_solution_count: AtomicU64,
    /// Shared flag to signal all solvers to stop (e.g., when optimality is proven).
    stop_signal: AtomicBool,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
}

impl<'a, T> Solver<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn add_solver<S>(&mut self, solver: S)
    where
        S: PortfolioSolver<T> + 'a,
    {
        self.portfolio_solver.push(Box::new(solver));
    }

    #[inline]
    pub fn add_solver_boxed(&mut self, solver: Box<dyn PortfolioSolver<T> + 'a>) {
        self.portfolio_solver.push(solver);
    }

    #[inline]
    pub fn num_solvers(&self) -> usize {
        self.portfolio_solver.len()
    }

    #[inline]
    pub fn incumbent(&self) -> &SharedIncumbent<T> {
        &self.incumbent
    }

    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    pub fn solve(&mut self, problem: &Problem<T>) -> SolverOutcome<T> {
        let start_time = std::time::Instant::now();

        self.incumbent = SharedIncumbent::new();
        self.stop_signal.store(false, Ordering::Relaxed);
        self.global_solution_count.store(0, Ordering::Relaxed);

        let results = self.run_portfolio_parallel(problem);
        self.construct_outcome(start_time, results)
    }

    /// Internal helper to spawn threads and collect results.
    fn run_portfolio_parallel(&mut self, problem: &Problem<T>) -> Vec<PortfolioSolverResult<T>> {
        let solution_limit = self.solution_limit;
        let time_limit = self.time_limit;
        let incumbent = &self.incumbent;
        let global_solution_count = &self.global_solution_count;
        let stop_signal = &self.stop_signal;

        let mut results = Vec::with_capacity(self.portfolio_solver.len());

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.portfolio_solver.len());

            for solver in &mut self.portfolio_solver {
                let handle = scope.spawn(move || {
                    let mut monitor = CompositeMonitor::<T>::new();
                    monitor.add_monitor(SolutionMonitor::new(global_solution_count, solution_limit));
                    if let Some(limit) = time_limit {
                        monitor.add_monitor(TimeLimitMonitor::new(limit));
                    }

                    let ctx = PortfolioSolverContext::new(problem, incumbent, &mut monitor, stop_signal);
                    let result = solver.solve(ctx);

                    if matches!(result.result(), SolverResult::Optimal(_)) {
                        tracing::debug!(
                            "portfolio solver '{}' proved optimality, signaling stop to other solvers",
                            solver.name()
                        );
                        stop_signal.store(true, Ordering::Relaxed);
                    }

                    result
                });
                handles.push(handle);
            }

            for handle in handles {
                let result = handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
                results.push(result);
            }
        });

        results
    }

    /// Finds the best selection among all thread results and the shared incumbent.
    fn find_best_selection(&self, results: &[PortfolioSolverResult<T>]) -> Selection<T> {
        let incumbent_snapshot = self.incumbent.snapshot();

        results
            .iter()
            .map(|r| r.result().selection())
            .chain(incumbent_snapshot.as_ref())
            .max_by_key(|s| s.objective_value())
            .cloned()
            .unwrap_or_else(Selection::empty)
    }

    /// One entry per worker. Results arrive in the order the workers were
    /// added.
    fn build_statistics(
        &self,
        start_time: std::time::Instant,
        results: &[PortfolioSolverResult<T>],
    ) -> SolverStatistics {
        let workers = self
            .portfolio_solver
            .iter()
            .zip(results)
            .map(|(solver, result)| WorkerStatistics {
                name: solver.name().to_string(),
                nodes_created: result.nodes_created(),
                nodes_expanded: result.nodes_expanded(),
                proved_optimal: matches!(result.result(), SolverResult::Optimal(_)),
            })
            .collect();

        SolverStatistics::new(
            self.global_solution_count.load(Ordering::Relaxed),
            start_time.elapsed(),
            workers,
        )
    }

    fn construct_outcome(
        &self,
        start_time: std::time::Instant,
        results: Vec<PortfolioSolverResult<T>>,
    ) -> SolverOutcome<T> {
        let stats = self.build_statistics(start_time, &results);
        let best_selection = self.find_best_selection(&results);

        let optimality_proven = results
            .iter()
            .any(|r| matches!(r.result(), SolverResult::Optimal(_)));

        if optimality_proven {
            return SolverOutcome::new(
                SolverResult::Optimal(best_selection),
                TerminationReason::OptimalityProven,
                stats,
            );
        }

        let reason = self.determine_abort_reason(&results);
        SolverOutcome::new(
            SolverResult::Feasible(best_selection),
            TerminationReason::Aborted(reason),
            stats,
        )
    }

    fn determine_abort_reason(&self, results: &[PortfolioSolverResult<T>]) -> String {
        if let Some(msg) = results.iter().find_map(|res| match res.termination_reason() {
            TerminationReason::Aborted(msg) => Some(msg.clone()),
            TerminationReason::OptimalityProven => None,
        }) {
            return msg;
        }

        if self.stop_signal.load(Ordering::Relaxed) {
            return "external interrupt".to_string();
        }

        "search stopped without proof".to_string()
    }
}

impl<'a, T> std::fmt::Debug for Solver<'a, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.portfolio_solver.iter().map(|s| s.name()).collect();
        f.debug_struct("Solver")
            .field("portfolio_solver", &names)
            .field("solution_limit", &self.solution_limit)
            .field("time_limit", &self.time_limit)
            .finish()
    }
}

pub struct SolverBuilder<'a, T> {
    portfolio_solver: Vec<Box<dyn PortfolioSolver<T> + 'a>>,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    node_limit: Option<u64>,
}

impl<'a, T> Default for SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            portfolio_solver: Vec::new(),
            solution_limit: None,
            time_limit: None,
            node_limit: None,
        }
    }

    /// Stops every worker once the workers together found `limit`
    /// improving selections.
    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Per-worker expansion budget for the default portfolio. Has no effect
    /// on workers added with `add_solver`.
    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    #[inline]
    pub fn add_solver<S>(mut self, solver: S) -> Self
    where
        S: PortfolioSolver<T> + 'a,
    {
        self.portfolio_solver.push(Box::new(solver));
        self
    }

    /// Adds one branch-and-bound worker per frontier discipline.
    pub fn with_default_portfolio(mut self) -> Self {
        for frontier in FrontierKind::ALL {
            let mut worker = BnbPortfolioSolver::new(frontier);
            if let Some(limit) = self.node_limit {
                worker = worker.with_node_limit(limit);
            }
            self.portfolio_solver.push(Box::new(worker));
        }
        self
    }

    /// Builds the solver. Without explicit workers the default portfolio is
    /// used.
    #[inline]
    pub fn build(self) -> Solver<'a, T> {
        let builder = if self.portfolio_solver.is_empty() {
            self.with_default_portfolio()
        } else {
            self
        };

        Solver {
            portfolio_solver: builder.portfolio_solver,
            incumbent: SharedIncumbent::new(),
            global_solution_count: AtomicU64::new(0),
            stop_signal: AtomicBool::new(false),
            solution_limit: builder.solution_limit,
            time_limit: builder.time_limit,
        }
    }
}
