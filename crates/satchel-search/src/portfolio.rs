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

//! The interface one portfolio worker implements.
//!
//! A portfolio runs several differently configured solvers on the same
//! problem at once. Each worker receives a `PortfolioSolverContext`, which
//! gives it the shared incumbent to read and publish through, a monitor to
//! report to, and a stop flag that is raised once any worker has proven
//! optimality.

use crate::{
    incumbent::SharedIncumbent,
    monitor::search_monitor::SearchMonitor,
    result::{SolverResult, TerminationReason},
};
use num_traits::{PrimInt, Signed};
use satchel_model::{problem::Problem, selection::Selection};
use std::sync::atomic::AtomicBool;

pub struct PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed,
{
    pub problem: &'a Problem<T>,
    pub incumbent: &'a SharedIncumbent<T>,
    pub monitor: &'a mut dyn SearchMonitor<T>,
    pub stop: &'a AtomicBool,
}

impl<'a, T> PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    pub fn new(
        problem: &'a Problem<T>,
        incumbent: &'a SharedIncumbent<T>,
        monitor: &'a mut dyn SearchMonitor<T>,
        stop: &'a AtomicBool,
    ) -> Self {
        Self {
            problem,
            incumbent,
            monitor,
            stop,
        }
    }
}

impl<'a, T> std::fmt::Debug for PortfolioSolverContext<'a, T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioSolverContext")
            .field("problem", &self.problem)
            .field("incumbent", &self.incumbent)
            .field("monitor", &self.monitor.name())
            .field("stop", &self.stop)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    nodes_created: u64,
    nodes_expanded: u64,
}

impl<T> PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn optimal(selection: Selection<T>) -> Self {
        Self {
            result: SolverResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            nodes_created: 0,
            nodes_expanded: 0,
        }
    }

    #[inline]
    pub fn aborted<R>(selection: Selection<T>, reason: R) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(selection),
            termination_reason: TerminationReason::Aborted(reason.into()),
            nodes_created: 0,
            nodes_expanded: 0,
        }
    }

    /// Attaches the search effort of the worker that produced this result.
    #[inline]
    pub fn with_node_counts(mut self, nodes_created: u64, nodes_expanded: u64) -> Self {
        self.nodes_created = nodes_created;
        self.nodes_expanded = nodes_expanded;
        self
    }

    #[inline]
    pub fn nodes_created(&self) -> u64 {
        self.nodes_created
    }

    #[inline]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }
}

impl<T> std::fmt::Display for PortfolioSolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PortfolioSolverResult(result: {}, termination_reason: {}, nodes_expanded: {})",
            self.result, self.termination_reason, self.nodes_expanded
        )
    }
}

/// A solver that can run as one worker of a portfolio.
pub trait PortfolioSolver<T>: Send
where
    T: PrimInt + Signed,
{
    fn solve<'a>(&mut self, context: PortfolioSolverContext<'a, T>) -> PortfolioSolverResult<T>;
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let optimal = PortfolioSolverResult::optimal(Selection::new(9i64, 4, Vec::new()));
        assert!(optimal.result().is_optimal());
        assert_eq!(optimal.termination_reason(), &TerminationReason::OptimalityProven);
        assert_eq!(optimal.nodes_expanded(), 0);

        let aborted =
            PortfolioSolverResult::aborted(Selection::<i64>::empty(), "stop").with_node_counts(9, 4);
        assert_eq!(aborted.nodes_created(), 9);
        assert_eq!(aborted.nodes_expanded(), 4);
        assert!(matches!(aborted.result(), SolverResult::Feasible(_)));
        assert_eq!(
            aborted.termination_reason(),
            &TerminationReason::Aborted("stop".to_string())
        );
    }
}
