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

use crate::bound::RelaxationBound;
use satchel_core::num::ops::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during the execution of the branch-and-bound solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BnbSolverStatistics {
    /// Total nodes created, root included.
    pub nodes_created: u64,
    /// Total nodes popped from the frontier and expanded.
    pub nodes_expanded: u64,
    /// Popped nodes with every item decided.
    pub leaves: u64,
    /// Nodes discarded because their bound did not beat the incumbent, at
    /// admission or when popped.
    pub prunings_bound: u64,
    /// Include children whose weight exceeded the capacity.
    pub prunings_infeasible: u64,
    /// Total incumbent improvements during the search.
    pub solutions_found: u64,
    /// The largest number of live nodes held by the frontier.
    pub max_frontier_len: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The bound of the root node, an upper bound on the optimum.
    pub root_bound: RelaxationBound,
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_node_created(&mut self, depth: u64) {
        self.nodes_created = self.nodes_created.saturating_add_val(1);
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add_val(1);
    }

    #[inline]
    pub fn on_leaf(&mut self) {
        self.leaves = self.leaves.saturating_add_val(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_frontier_len(&mut self, len: usize) {
        self.max_frontier_len = self.max_frontier_len.max(len as u64);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_bound(&mut self, bound: RelaxationBound) {
        self.root_bound = bound;
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Satchel-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes created:        {}", self.nodes_created)?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Leaves:               {}", self.leaves)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Max frontier size:    {}", self.max_frontier_len)?;
        writeln!(f, "  Prunings (infeasible):{}", self.prunings_infeasible)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Root bound:           {}", self.root_bound)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_high_water_marks() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_node_created(0);
        stats.on_node_created(3);
        stats.on_node_created(1);
        stats.on_frontier_len(4);
        stats.on_frontier_len(2);
        stats.on_pruning_bound();
        stats.on_solution_found();

        assert_eq!(stats.nodes_created, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.max_frontier_len, 4);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.solutions_found, 1);

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Nodes created:        3"));
        assert!(rendered.contains("Max frontier size:    4"));
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics {
            nodes_expanded: u64::MAX,
            ..Default::default()
        };
        stats.on_node_expanded();
        assert_eq!(stats.nodes_expanded, u64::MAX);
    }
}
