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
use std::collections::VecDeque;

/// Breadth-first frontier: nodes are expanded in admission order.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier<T> {
    queue: VecDeque<SearchNode<T>>,
}

impl<T> FifoFrontier<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn name(&self) -> &str {
        "FifoFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode<T>) {
        self.queue.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode<T>> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::RelaxationBound;

    #[test]
    fn test_pops_in_admission_order() {
        let mut frontier = FifoFrontier::<i64>::new();
        for bound in [3, 1, 2] {
            frontier.push(SearchNode::root(0).with_bound(RelaxationBound::integral(bound)));
        }
        assert_eq!(frontier.len(), 3);
        let order: Vec<i128> =
            std::iter::from_fn(|| frontier.pop().map(|n| n.bound().floor())).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert!(frontier.is_empty());
    }
}
