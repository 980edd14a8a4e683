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

use std::time::Duration;

/// Search effort of one portfolio worker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerStatistics {
    pub name: String,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Nodes popped and branched on.
    pub nodes_expanded: u64,
    /// `true` if this worker exhausted its frontier.
    pub proved_optimal: bool,
}

impl std::fmt::Display for WorkerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} created, {} expanded{}",
            self.name,
            self.nodes_created,
            self.nodes_expanded,
            if self.proved_optimal { ", proved optimal" } else { "" }
        )
    }
}

/// Statistics collected over a whole solve, one entry per worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatistics {
    /// Number of improving selections found across all workers.
    pub solutions_found: u64,
    /// Wall-clock duration of the solve.
    pub solve_duration: Duration,
    /// Workers in the order they were added to the portfolio.
    pub workers: Vec<WorkerStatistics>,
}

impl SolverStatistics {
    #[inline]
    pub fn new(solutions_found: u64, solve_duration: Duration, workers: Vec<WorkerStatistics>) -> Self {
        Self {
            solutions_found,
            solve_duration,
            workers,
        }
    }

    #[inline]
    pub fn used_threads(&self) -> usize {
        self.workers.len()
    }

    /// Nodes created by all workers together. Workers explore overlapping
    /// trees, so this counts shared subtrees once per worker.
    pub fn nodes_created(&self) -> u64 {
        self.workers
            .iter()
            .fold(0u64, |acc, w| acc.saturating_add(w.nodes_created))
    }

    /// Nodes expanded by all workers together.
    pub fn nodes_expanded(&self) -> u64 {
        self.workers
            .iter()
            .fold(0u64, |acc, w| acc.saturating_add(w.nodes_expanded))
    }

    /// The first worker that proved optimality, if any.
    pub fn proving_worker(&self) -> Option<&WorkerStatistics> {
        self.workers.iter().find(|w| w.proved_optimal)
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Solutions found:  {}", self.solutions_found)?;
        writeln!(f, "  Nodes expanded:   {}", self.nodes_expanded())?;
        writeln!(f, "  Solve duration:   {:.3}s", self.solve_duration.as_secs_f64())?;
        writeln!(f, "  Workers:          {}", self.used_threads())?;
        for worker in &self.workers {
            writeln!(f, "    {}", worker)?;
        }
        Ok(())
    }
}
