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

//! Static monitor combinators
//!
//! A pair `(A, B)` is a monitor that forwards every event to `A` and then
//! to `B`, and an `Option<M>` is a monitor that is present or not. Nesting
//! them builds the monitor stack of a solve without boxing:
//! `(stop, (node_limit, progress))`.
//!
//! `search_command` asks `A` first and only consults `B` while `A` says
//! `Continue`, so stricter stop conditions go on the left.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use num_traits::{PrimInt, Signed};
use satchel_model::{problem::Problem, selection::Selection};
use satchel_search::monitor::search_monitor::SearchCommand;

impl<T, M> TreeSearchMonitor<T> for Option<M>
where
    T: PrimInt + Signed,
    M: TreeSearchMonitor<T>,
{
    #[inline(always)]
    fn name(&self) -> &str {
        match self {
            Some(monitor) => monitor.name(),
            None => "none",
        }
    }

    #[inline(always)]
    fn on_enter_search(&mut self, problem: &Problem<T>, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_enter_search(problem, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        match self {
            Some(monitor) => monitor.search_command(statistics),
            None => SearchCommand::Continue,
        }
    }

    #[inline(always)]
    fn on_step(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_step(node, statistics);
        }
    }

    #[inline(always)]
    fn on_bound_computed(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_bound_computed(node, statistics);
        }
    }

    #[inline(always)]
    fn on_node_admitted(
        &mut self,
        node: &SearchNode<T>,
        frontier_len: usize,
        statistics: &BnbSolverStatistics,
    ) {
        if let Some(monitor) = self {
            monitor.on_node_admitted(node, frontier_len, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        node: &SearchNode<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics,
    ) {
        if let Some(monitor) = self {
            monitor.on_prune(node, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_leaf(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_leaf(node, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, selection: &Selection<T>, statistics: &BnbSolverStatistics) {
        if let Some(monitor) = self {
            monitor.on_solution_found(selection, statistics);
        }
    }
}

impl<T, A, B> TreeSearchMonitor<T> for (A, B)
where
    T: PrimInt + Signed,
    A: TreeSearchMonitor<T>,
    B: TreeSearchMonitor<T>,
{
    #[inline(always)]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, problem: &Problem<T>, statistics: &BnbSolverStatistics) {
        self.0.on_enter_search(problem, statistics);
        self.1.on_enter_search(problem, statistics);
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        self.0.on_exit_search(statistics);
        self.1.on_exit_search(statistics);
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        match self.0.search_command(statistics) {
            SearchCommand::Continue => self.1.search_command(statistics),
            terminate => terminate,
        }
    }

    #[inline(always)]
    fn on_step(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        self.0.on_step(node, statistics);
        self.1.on_step(node, statistics);
    }

    #[inline(always)]
    fn on_bound_computed(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        self.0.on_bound_computed(node, statistics);
        self.1.on_bound_computed(node, statistics);
    }

    #[inline(always)]
    fn on_node_admitted(
        &mut self,
        node: &SearchNode<T>,
        frontier_len: usize,
        statistics: &BnbSolverStatistics,
    ) {
        self.0.on_node_admitted(node, frontier_len, statistics);
        self.1.on_node_admitted(node, frontier_len, statistics);
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        node: &SearchNode<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics,
    ) {
        self.0.on_prune(node, reason, statistics);
        self.1.on_prune(node, reason, statistics);
    }

    #[inline(always)]
    fn on_leaf(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics) {
        self.0.on_leaf(node, statistics);
        self.1.on_leaf(node, statistics);
    }

    #[inline(always)]
    fn on_solution_found(&mut self, selection: &Selection<T>, statistics: &BnbSolverStatistics) {
        self.0.on_solution_found(selection, statistics);
        self.1.on_solution_found(selection, statistics);
    }
}
