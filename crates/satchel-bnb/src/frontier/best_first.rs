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

use crate::{frontier::Frontier, node::SearchNode};
use std::{cmp::Ordering, collections::BinaryHeap};

/// A heap entry ordered by bound, then by admission order.
///
/// `BinaryHeap` is a max-heap: the highest bound is popped first, and among
/// equal bounds the earliest admitted node (lowest `seq`).
#[derive(Debug, Clone)]
struct FrontierEntry<T> {
    seq: u64,
    node: SearchNode<T>,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound()
            .cmp(&other.node.bound())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first frontier: the node with the highest bound is expanded next.
#[derive(Clone, Debug)]
pub struct BestFirstFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
}

impl<T> Default for BestFirstFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BestFirstFrontier<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }
}

impl<T> Frontier<T> for BestFirstFrontier<T> {
    fn name(&self) -> &str {
        "BestFirstFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode<T>) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(FrontierEntry { seq, node });
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode<T>> {
        self.heap.pop().map(|entry| entry.node)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::RelaxationBound;

    fn node(bound: RelaxationBound, depth: usize) -> SearchNode<i64> {
        // Equal-bound nodes are told apart by depth.
        let mut node = SearchNode::root(depth);
        for _ in 0..depth {
            node = node.exclude_child();
        }
        node.with_bound(bound)
    }

    #[test]
    fn test_pops_highest_bound_first() {
        let mut frontier = BestFirstFrontier::new();
        let seven_and_a_half = RelaxationBound::fractional(7, 1, 2);
        for bound in [
            RelaxationBound::integral(3),
            RelaxationBound::integral(1),
            seven_and_a_half,
            RelaxationBound::integral(2),
        ] {
            frontier.push(node(bound, 0));
        }
        let order: Vec<RelaxationBound> =
            std::iter::from_fn(|| frontier.pop().map(|n| n.bound())).collect();
        assert_eq!(
            order,
            vec![
                seven_and_a_half,
                RelaxationBound::integral(3),
                RelaxationBound::integral(2),
                RelaxationBound::integral(1),
            ]
        );
    }

    #[test]
    fn test_orders_bounds_that_round_to_the_same_f64() {
        let huge = 1i128 << 60;
        let mut frontier = BestFirstFrontier::new();
        frontier.push(node(RelaxationBound::fractional(huge, 1, 3), 1));
        frontier.push(node(RelaxationBound::fractional(huge, 2, 3), 2));
        frontier.push(node(RelaxationBound::integral(huge), 3));
        let depths: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|n| n.depth())).collect();
        assert_eq!(depths, vec![2, 1, 3]);
    }

    #[test]
    fn test_equal_bounds_pop_in_admission_order() {
        let mut frontier = BestFirstFrontier::new();
        let five = RelaxationBound::integral(5);
        frontier.push(node(five, 1));
        frontier.push(node(five, 2));
        frontier.push(node(five, 3));
        let depths: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|n| n.depth())).collect();
        assert_eq!(depths, vec![1, 2, 3]);
    }
}
