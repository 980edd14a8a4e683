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

//! Upper bounds on the profit reachable from a node.
//!
//! A `BoundEstimator` must be admissible: for every node, the estimate is
//! at least the profit of the best feasible completion of that node. The
//! engine discards a node as soon as its estimate does not beat the
//! incumbent, so an estimator that underestimates loses optimal solutions.
//!
//! `FractionalBound` is the linear relaxation of the remaining problem.
//! Walking the catalog densest-first, it takes every remaining item that
//! still fits whole, then fills the leftover capacity with the matching
//! fraction of the first item that does not. With items in descending
//! density order this is the optimum of the relaxation, hence admissible.
//!
//! Bounds are kept as exact rationals (`RelaxationBound`). Profits beyond
//! 2^53 are not representable in `f64`, and a rounded bound can fall onto
//! the incumbent and prune the optimum.

use crate::node::SearchNode;
use num_traits::{PrimInt, Signed};
use satchel_core::num::convert::Widen;
use satchel_model::{catalog::ItemCatalog, index::RankIndex};
use std::cmp::Ordering;

/// The value `whole + numerator / denominator`, normalized so that
/// `0 <= numerator < denominator`.
///
/// Denominators are item weights and numerators are smaller than them, so
/// cross products stay below 2^126 for every 64-bit instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelaxationBound {
    whole: i128,
    numerator: i128,
    denominator: i128,
}

impl RelaxationBound {
    pub const ZERO: Self = Self::integral(0);

    /// A bound without fractional part.
    #[inline]
    pub const fn integral(whole: i128) -> Self {
        Self {
            whole,
            numerator: 0,
            denominator: 1,
        }
    }

    /// The bound `whole + numerator / denominator`.
    ///
    /// A non-positive `denominator` or negative `numerator` drops the
    /// fraction.
    #[inline]
    pub fn fractional(whole: i128, numerator: i128, denominator: i128) -> Self {
        if denominator <= 0 || numerator < 0 {
            return Self::integral(whole);
        }
        Self {
            whole: whole + numerator / denominator,
            numerator: numerator % denominator,
            denominator,
        }
    }

    /// The integer part. Every integer profit below the bound is at most
    /// this.
    #[inline]
    pub fn floor(&self) -> i128 {
        self.whole
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.numerator == 0
    }

    /// `true` iff the bound is strictly greater than `incumbent`.
    #[inline]
    pub fn exceeds(&self, incumbent: i128) -> bool {
        self.whole > incumbent || (self.whole == incumbent && self.numerator > 0)
    }
}

impl Default for RelaxationBound {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for RelaxationBound {
    fn cmp(&self, other: &Self) -> Ordering {
        self.whole.cmp(&other.whole).then_with(|| {
            (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
        })
    }
}

impl PartialOrd for RelaxationBound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RelaxationBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{} + {}/{}", self.whole, self.numerator, self.denominator)
        }
    }
}

/// Computes an admissible upper bound for a node.
pub trait BoundEstimator<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the estimator.
    fn name(&self) -> &str;

    /// Returns an upper bound on the profit of any feasible completion of
    /// `node`.
    fn estimate(
        &self,
        node: &SearchNode<T>,
        capacity: T,
        catalog: &ItemCatalog<T>,
    ) -> RelaxationBound;
}

/// The fractional (linear relaxation) bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FractionalBound;

impl FractionalBound {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> BoundEstimator<T> for FractionalBound
where
    T: PrimInt + Signed + Widen,
{
    fn name(&self) -> &str {
        "FractionalBound"
    }

    fn estimate(
        &self,
        node: &SearchNode<T>,
        capacity: T,
        catalog: &ItemCatalog<T>,
    ) -> RelaxationBound {
        // Saturated or overfull: nothing more can be added. A saturated
        // node's own profit was already offered to the incumbent when it
        // was created.
        if node.weight() >= capacity {
            return RelaxationBound::ZERO;
        }

        let n = catalog.num_items();
        let capacity = capacity.widen();
        let mut whole = node.profit().widen();
        let mut total_weight = node.weight().widen();
        let mut rank = node.next_rank().get();

        while rank < n {
            let r = RankIndex::new(rank);
            let next_weight = total_weight + catalog.weight(r).widen();
            if next_weight > capacity {
                break;
            }
            total_weight = next_weight;
            whole += catalog.value(r).widen();
            rank += 1;
        }

        if rank == n {
            return RelaxationBound::integral(whole);
        }

        let r = RankIndex::new(rank);
        RelaxationBound::fractional(
            whole,
            (capacity - total_weight) * catalog.value(r).widen(),
            catalog.weight(r).widen(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn catalog() -> ItemCatalog<IntegerType> {
        ItemCatalog::from_pairs(&[(10, 60), (20, 100), (30, 120)]).unwrap()
    }

    #[test]
    fn test_fractional_bound_is_normalized() {
        let bound = RelaxationBound::fractional(10, 7, 3);
        assert_eq!(bound, RelaxationBound::fractional(12, 1, 3));
        assert_eq!(bound.floor(), 12);
        assert!(!bound.is_integral());
        assert_eq!(format!("{}", bound), "12 + 1/3");

        assert_eq!(RelaxationBound::fractional(5, 6, 3), RelaxationBound::integral(7));
        assert_eq!(RelaxationBound::fractional(5, 1, 0), RelaxationBound::integral(5));
        assert_eq!(format!("{}", RelaxationBound::integral(7)), "7");
    }

    #[test]
    fn test_ordering_and_exceeds_are_exact() {
        let third = RelaxationBound::fractional(4, 1, 3);
        let half = RelaxationBound::fractional(4, 1, 2);
        assert!(third < half);
        assert!(half < RelaxationBound::integral(5));
        assert_eq!(
            RelaxationBound::fractional(4, 2, 4).cmp(&half),
            std::cmp::Ordering::Equal
        );

        assert!(third.exceeds(4));
        assert!(!third.exceeds(5));
        assert!(!RelaxationBound::integral(4).exceeds(4));
        assert!(RelaxationBound::integral(4).exceeds(3));

        // Beyond 2^53 a one-unit fraction is invisible to `f64`.
        let huge = 1i128 << 60;
        let above = RelaxationBound::fractional(huge, 1, 3);
        assert_eq!(huge as f64 + 1.0 / 3.0, huge as f64);
        assert!(above.exceeds(huge));
        assert!(above > RelaxationBound::integral(huge));
    }

    #[test]
    fn test_bound_is_exact_for_large_values() {
        // Whole items sum past 2^53 and the last item contributes a third
        // of its value.
        let catalog = ItemCatalog::<IntegerType>::from_pairs(&[
            (1, 144_115_188_075_855_871),
            (3, 432_345_564_227_567_609),
        ])
        .unwrap();
        let root = SearchNode::root(catalog.num_items());
        let bound = FractionalBound.estimate(&root, 2, &catalog);
        // 144115188075855871 + 432345564227567609 / 3
        assert_eq!(
            bound,
            RelaxationBound::fractional(144_115_188_075_855_871, 432_345_564_227_567_609, 3)
        );
        assert_eq!(bound.floor(), 144_115_188_075_855_871 + 144_115_188_075_855_869);
        assert!(!bound.is_integral());
    }

    #[test]
    fn test_root_bound_matches_hand_computation() {
        let catalog = catalog();
        let root = SearchNode::root(catalog.num_items());
        // 60 + 100 whole, then 20/30 of 120.
        assert_eq!(
            FractionalBound.estimate(&root, 50, &catalog),
            RelaxationBound::integral(240)
        );
    }

    #[test]
    fn test_bound_is_zero_once_capacity_is_reached() {
        let catalog = catalog();
        let root = SearchNode::root(catalog.num_items());
        assert_eq!(FractionalBound.estimate(&root, 0, &catalog), RelaxationBound::ZERO);

        let full = root.include_child(&catalog);
        assert_eq!(FractionalBound.estimate(&full, 10, &catalog), RelaxationBound::ZERO);
        assert_eq!(FractionalBound.estimate(&full, 5, &catalog), RelaxationBound::ZERO);
    }

    #[test]
    fn test_bound_stops_after_first_fractional_item() {
        // Densities 5.0, 4.0, 3.0. After the fractional part of the
        // second item nothing else is added even though item 3 would fit.
        let catalog =
            ItemCatalog::<IntegerType>::from_pairs(&[(4, 20), (10, 40), (1, 3)]).unwrap();
        let root = SearchNode::root(catalog.num_items());
        // 20 + 6/10 * 40 = 44.
        assert_eq!(
            FractionalBound.estimate(&root, 10, &catalog),
            RelaxationBound::integral(44)
        );
    }

    #[test]
    fn test_bound_with_all_items_fitting_is_total_value() {
        let catalog = catalog();
        let root = SearchNode::root(catalog.num_items());
        assert_eq!(
            FractionalBound.estimate(&root, 1_000, &catalog),
            RelaxationBound::integral(280)
        );
    }

    /// Best profit over all feasible completions of `node`, by enumeration.
    fn best_completion(
        node: &SearchNode<IntegerType>,
        capacity: IntegerType,
        catalog: &ItemCatalog<IntegerType>,
    ) -> IntegerType {
        if node.is_leaf(catalog.num_items()) {
            return if node.is_feasible(capacity) {
                node.profit()
            } else {
                IntegerType::MIN
            };
        }
        let with = best_completion(&node.include_child(catalog), capacity, catalog);
        let without = best_completion(&node.exclude_child(), capacity, catalog);
        with.max(without)
    }

    fn visit_all(
        node: SearchNode<IntegerType>,
        capacity: IntegerType,
        catalog: &ItemCatalog<IntegerType>,
        checked: &mut usize,
    ) {
        if node.weight() < capacity {
            let bound = FractionalBound.estimate(&node, capacity, catalog);
            let best = best_completion(&node, capacity, catalog);
            assert!(
                bound >= RelaxationBound::integral(best as i128),
                "bound {} below best completion {} for {}",
                bound,
                best,
                node
            );
            *checked += 1;
        }
        if node.is_leaf(catalog.num_items()) {
            return;
        }
        visit_all(node.include_child(catalog), capacity, catalog, checked);
        visit_all(node.exclude_child(), capacity, catalog, checked);
    }

    #[test]
    fn test_bound_is_admissible_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for _ in 0..40 {
            let n = rng.random_range(0..=10);
            let pairs: Vec<(IntegerType, IntegerType)> = (0..n)
                .map(|_| (rng.random_range(1..=30), rng.random_range(1..=50)))
                .collect();
            let capacity = rng.random_range(0..=80);
            let catalog = ItemCatalog::from_pairs(&pairs).unwrap();

            let mut checked = 0;
            visit_all(SearchNode::root(n), capacity, &catalog, &mut checked);
            if capacity > 0 {
                assert!(checked > 0);
            }
        }
    }
}
