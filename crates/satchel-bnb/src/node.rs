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

//! Search nodes.
//!
//! A `SearchNode` is a value: the decisions taken for the first `depth`
//! items of the catalog, summarized as accumulated profit and weight, plus
//! the upper bound computed once when the node was created. Nodes hold no
//! references to parents or children; the frontier owns them outright.
//!
//! `level` is the rank of the last decided item. The root has decided
//! nothing and has no level (`None`), so a node's children always decide
//! the item at rank `level + 1`, or rank `0` for the root.
//!
//! Each node also records which ranks it took in a `FixedBitSet`, so the
//! incumbent can be reported as a `Selection` without a tree to walk back
//! through.

use crate::bound::RelaxationBound;
use fixedbitset::FixedBitSet;
use num_traits::{PrimInt, Signed};
use satchel_core::num::ops::SaturatingAddVal;
use satchel_model::{catalog::ItemCatalog, index::RankIndex, selection::Selection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<T> {
    level: Option<RankIndex>,
    profit: T,
    weight: T,
    bound: RelaxationBound,
    taken: FixedBitSet,
}

impl<T> SearchNode<T> {
    /// The rank of the last decided item; `None` for the root.
    #[inline]
    pub fn level(&self) -> Option<RankIndex> {
        self.level
    }

    /// The rank decided by this node's children.
    #[inline]
    pub fn next_rank(&self) -> RankIndex {
        match self.level {
            Some(level) => level.next(),
            None => RankIndex::new(0),
        }
    }

    /// Number of decided items. `0` for the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.next_rank().get()
    }

    #[inline]
    pub fn bound(&self) -> RelaxationBound {
        self.bound
    }

    /// Ranks taken along the path to this node.
    #[inline]
    pub fn taken(&self) -> &FixedBitSet {
        &self.taken
    }

    /// `true` once every item of the catalog has been decided.
    #[inline]
    pub fn is_leaf(&self, num_items: usize) -> bool {
        self.depth() >= num_items
    }
}

impl<T> SearchNode<T>
where
    T: Copy,
{
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }
}

impl<T> SearchNode<T>
where
    T: PrimInt + Signed + SaturatingAddVal,
{
    /// The root node: nothing decided, zero profit and weight.
    ///
    /// Its bound is zero until `with_bound` is applied.
    #[inline]
    pub fn root(num_items: usize) -> Self {
        Self {
            level: None,
            profit: T::zero(),
            weight: T::zero(),
            bound: RelaxationBound::ZERO,
            taken: FixedBitSet::with_capacity(num_items),
        }
    }

    /// Sets the bound. Consumes the node so the bound is fixed once the
    /// node is shared with the frontier.
    #[inline]
    pub fn with_bound(mut self, bound: RelaxationBound) -> Self {
        self.bound = bound;
        self
    }

    #[inline]
    pub fn is_feasible(&self, capacity: T) -> bool {
        self.weight <= capacity
    }

    /// The child that takes the item at `next_rank()`.
    ///
    /// The child's bound is zero until `with_bound` is applied.
    ///
    /// # Panics
    ///
    /// Panics if this node is a leaf.
    #[inline]
    pub fn include_child(&self, catalog: &ItemCatalog<T>) -> Self {
        let rank = self.next_rank();
        debug_assert!(
            rank.get() < catalog.num_items(),
            "called `SearchNode::include_child` on a leaf: the len is {} but the rank is {}",
            catalog.num_items(),
            rank.get()
        );

        let mut taken = self.taken.clone();
        taken.grow(catalog.num_items());
        taken.insert(rank.get());

        Self {
            level: Some(rank),
            profit: self.profit.saturating_add_val(catalog.value(rank)),
            weight: self.weight.saturating_add_val(catalog.weight(rank)),
            bound: RelaxationBound::ZERO,
            taken,
        }
    }

    /// The child that skips the item at `next_rank()`.
    #[inline]
    pub fn exclude_child(&self) -> Self {
        Self {
            level: Some(self.next_rank()),
            profit: self.profit,
            weight: self.weight,
            bound: RelaxationBound::ZERO,
            taken: self.taken.clone(),
        }
    }

    /// The items taken by this node, in input terms.
    #[inline]
    pub fn selection(&self, catalog: &ItemCatalog<T>) -> Selection<T> {
        Selection::from_ranks(catalog, self.taken.ones().map(RankIndex::new))
    }
}

impl<T> std::fmt::Display for SearchNode<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.level {
            Some(level) => level.get() as i64,
            None => -1,
        };
        write!(
            f,
            "SearchNode(level: {}, profit: {}, weight: {}, bound: {})",
            level, self.profit, self.weight, self.bound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::index::ItemIndex;

    type IntegerType = i64;

    fn catalog() -> ItemCatalog<IntegerType> {
        // Input order is also density order here: 6.0, 5.0, 4.0.
        ItemCatalog::from_pairs(&[(10, 60), (20, 100), (30, 120)]).unwrap()
    }

    #[test]
    fn test_root_has_no_level() {
        let root = SearchNode::<IntegerType>::root(3);
        assert_eq!(root.level(), None);
        assert_eq!(root.next_rank(), RankIndex::new(0));
        assert_eq!(root.depth(), 0);
        assert!(!root.is_leaf(3));
        assert!(root.is_leaf(0));
        assert_eq!(format!("{}", root), "SearchNode(level: -1, profit: 0, weight: 0, bound: 0)");
    }

    #[test]
    fn test_children_advance_level_and_accumulate() {
        let catalog = catalog();
        let root = SearchNode::root(catalog.num_items());

        let take0 = root.include_child(&catalog);
        assert_eq!(take0.level(), Some(RankIndex::new(0)));
        assert_eq!(take0.profit(), 60);
        assert_eq!(take0.weight(), 10);

        let skip1 = take0.exclude_child();
        assert_eq!(skip1.level(), Some(RankIndex::new(1)));
        assert_eq!(skip1.profit(), 60);
        assert_eq!(skip1.weight(), 10);

        let take2 = skip1.include_child(&catalog);
        assert_eq!(take2.profit(), 180);
        assert_eq!(take2.weight(), 40);
        assert!(take2.is_leaf(catalog.num_items()));
        assert!(take2.is_feasible(40));
        assert!(!take2.is_feasible(39));

        let selection = take2.selection(&catalog);
        assert_eq!(selection.items(), &[ItemIndex::new(0), ItemIndex::new(2)]);
        assert_eq!(selection.objective_value(), 180);
        assert_eq!(selection.total_weight(), 40);
    }

    #[test]
    fn test_children_do_not_share_state_with_parent() {
        let catalog = catalog();
        let bound = RelaxationBound::fractional(12, 1, 2);
        let root = SearchNode::root(catalog.num_items()).with_bound(bound);
        let child = root.include_child(&catalog);

        assert_eq!(root.taken().count_ones(..), 0);
        assert_eq!(child.taken().count_ones(..), 1);
        assert_eq!(root.bound(), bound);
        assert_eq!(child.bound(), RelaxationBound::ZERO);
    }
}
