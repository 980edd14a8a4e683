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

//! Console progress reporting
//!
//! `LogTreeSearchMonitor` prints a fixed-width progress table while the
//! search runs. The clock is only consulted when
//! `(nodes_expanded & clock_check_mask) == 0`, so the per-step overhead is a
//! single mask test.

use crate::{
    monitor::tree_search_monitor::TreeSearchMonitor,
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use num_traits::{PrimInt, Signed};
use satchel_model::{problem::Problem, selection::Selection};
use std::time::{Duration, Instant};

const TABLE_WIDTH: usize = 96;

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_objective: Option<T>,
    frontier_len: usize,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_objective: None,
            frontier_len: 0,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<7} | {:<12} | {:<14} | {:<14} | {:<10}",
            "Elapsed", "Expanded", "Depth", "Frontier", "Best Profit", "Bound Prunes", "Infeasible"
        );
        println!("{}", "-".repeat(TABLE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self, node: &SearchNode<T>, stats: &BnbSolverStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best = match &self.best_objective {
            Some(value) => format!("{}", value),
            None => "-".to_string(),
        };
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<7} | {:<12} | {:<14} | {:<14} | {:<10}",
            elapsed_field,
            stats.nodes_expanded,
            node.depth(),
            self.frontier_len,
            best,
            stats.prunings_bound,
            stats.prunings_infeasible
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, problem: &Problem<T>, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_objective = None;
        self.frontier_len = 0;
        println!(
            "Searching {} items with capacity {}",
            problem.num_items(),
            problem.capacity()
        );
        self.print_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        println!("{}", "-".repeat(TABLE_WIDTH));
        println!(
            "Search finished after {} expansions.",
            statistics.nodes_expanded
        );
    }

    fn on_step(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        if (statistics.nodes_expanded & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(node, statistics);
        }
    }

    fn on_node_admitted(
        &mut self,
        _node: &SearchNode<T>,
        frontier_len: usize,
        _statistics: &BnbSolverStatistics,
    ) {
        self.frontier_len = frontier_len;
    }

    fn on_solution_found(&mut self, selection: &Selection<T>, _statistics: &BnbSolverStatistics) {
        self.best_objective = Some(selection.objective_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bnb::BnbSolver, frontier::FrontierKind};

    #[test]
    fn test_reports_through_a_full_solve() {
        let problem = Problem::<i64>::from_pairs(&[(10, 60), (20, 100), (30, 120)], 50).unwrap();
        // Zero interval and mask: a line on every expansion.
        let mut monitor = LogTreeSearchMonitor::<i64>::new(Duration::ZERO, 0);

        for frontier in FrontierKind::ALL {
            let outcome = BnbSolver::with_frontier(frontier).solve(&problem, &mut monitor);
            assert!(outcome.is_optimal());
            assert_eq!(outcome.objective_value(), 220);
            assert_eq!(monitor.best_objective, Some(220));
            assert!(monitor.frontier_len >= 1);
        }
    }

    #[test]
    fn test_default_and_display() {
        let monitor = LogTreeSearchMonitor::<i32>::default();
        assert_eq!(monitor.name(), "LogTreeSearchMonitor");
        assert_eq!(
            format!("{}", monitor),
            "LogTreeSearchMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
    }
}
