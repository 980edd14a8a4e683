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

/// Depth-first frontier: the most recently admitted node is expanded next.
///
/// Depth-first keeps at most two live nodes per level, so `preallocated`
/// sizes the stack for the full depth up front.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier<T> {
    stack: Vec<SearchNode<T>>,
}

impl<T> LifoFrontier<T> {
    #[inline]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Creates a stack with room for a depth-first search over `num_items`.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            stack: Vec::with_capacity(num_items.saturating_mul(2).saturating_add(1)),
        }
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn name(&self) -> &str {
        "LifoFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode<T>) {
        self.stack.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode<T>> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::RelaxationBound;

    #[test]
    fn test_pops_most_recent_first() {
        let mut frontier = LifoFrontier::<i64>::preallocated(4);
        for bound in [3, 1, 2] {
            frontier.push(SearchNode::root(0).with_bound(RelaxationBound::integral(bound)));
        }
        let order: Vec<i128> =
            std::iter::from_fn(|| frontier.pop().map(|n| n.bound().floor())).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_clear_empties() {
        let mut frontier = LifoFrontier::<i64>::new();
        frontier.push(SearchNode::root(0));
        frontier.clear();
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}
