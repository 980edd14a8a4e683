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

//! Node budget for the tree search
//!
//! `NodeLimitMonitor` terminates the search once the number of expanded
//! nodes reaches the configured limit. A limit of `0` stops the search
//! before the root is expanded.

use crate::{monitor::tree_search_monitor::TreeSearchMonitor, stats::BnbSolverStatistics};
use num_traits::{PrimInt, Signed};
use satchel_search::monitor::search_monitor::SearchCommand;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeLimitMonitor<T> {
    node_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T> {
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }
}

impl<T> std::fmt::Display for NodeLimitMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeLimitMonitor(node_limit: {})", self.node_limit)
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        if statistics.nodes_expanded >= self.node_limit {
            SearchCommand::terminate(format!("node limit of {} reached", self.node_limit))
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = NodeLimitMonitor::<i64>::new(3);
        let mut stats = BnbSolverStatistics::default();
        for _ in 0..3 {
            assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);
            stats.on_node_expanded();
        }
        match monitor.search_command(&stats) {
            SearchCommand::Terminate(msg) => assert!(msg.contains("node limit of 3")),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }
}
