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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `PruneReason` for observing
//! and controlling branch-and-bound. A monitor can stop the search through
//! `search_command` (default: `Continue`), which is polled once before
//! every pop from the frontier.
//!
//! Lifecycle
//! - enter → { command → step → (leaf | bound computed → admitted / prune)* } → exit
//! - `on_solution_found` fires whenever the incumbent improves.
//! - `BnbSolverStatistics` is provided to every callback for telemetry.

use crate::{node::SearchNode, stats::BnbSolverStatistics};
use num_traits::{PrimInt, Signed};
use satchel_model::{problem::Problem, selection::Selection};
use satchel_search::monitor::search_monitor::SearchCommand;

/// Reasons for discarding a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The node's weight exceeds the capacity.
    Infeasible,
    /// The node's bound does not beat the incumbent.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
///
/// Every event hook defaults to doing nothing, so a monitor only overrides
/// the events it reacts to. `()` is the monitor that observes nothing.
pub trait TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, _problem: &Problem<T>, _statistics: &BnbSolverStatistics) {}
    /// Called when the search ends.
    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}
    /// Called to determine the next action of the search.
    fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called for every node popped from the frontier, before expansion.
    fn on_step(&mut self, _node: &SearchNode<T>, _statistics: &BnbSolverStatistics) {}
    /// Called when a node received its bound.
    fn on_bound_computed(&mut self, _node: &SearchNode<T>, _statistics: &BnbSolverStatistics) {}
    /// Called when a node was admitted to the frontier.
    fn on_node_admitted(
        &mut self,
        _node: &SearchNode<T>,
        _frontier_len: usize,
        _statistics: &BnbSolverStatistics,
    ) {
    }
    /// Called when a node is discarded.
    fn on_prune(
        &mut self,
        _node: &SearchNode<T>,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics,
    ) {
    }
    /// Called when a popped node has every item decided.
    fn on_leaf(&mut self, _node: &SearchNode<T>, _statistics: &BnbSolverStatistics) {}
    /// Called when the incumbent improves.
    fn on_solution_found(&mut self, _selection: &Selection<T>, _statistics: &BnbSolverStatistics) {
    }
}

impl<T> TreeSearchMonitor<T> for ()
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "none"
    }
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T, M> TreeSearchMonitor<T> for &mut M
where
    T: PrimInt + Signed,
    M: TreeSearchMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, problem: &Problem<T>, statistics: &BnbSolverStatistics) {
        (**self).on_enter_search(problem, statistics)
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }

    #[inline(always)]
    fn on_step(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        (**self).on_step(node, statistics)
    }

    #[inline(always)]
    fn on_bound_computed(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        (**self).on_bound_computed(node, statistics)
    }

    #[inline(always)]
    fn on_node_admitted(
        &mut self,
        node: &SearchNode<T>,
        frontier_len: usize,
        statistics: &BnbSolverStatistics,
    ) {
        (**self).on_node_admitted(node, frontier_len, statistics)
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        node: &SearchNode<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics,
    ) {
        (**self).on_prune(node, reason, statistics)
    }

    #[inline(always)]
    fn on_leaf(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        (**self).on_leaf(node, statistics)
    }

    #[inline(always)]
    fn on_solution_found(&mut self, selection: &Selection<T>, statistics: &BnbSolverStatistics) {
        (**self).on_solution_found(selection, statistics)
    }
}
