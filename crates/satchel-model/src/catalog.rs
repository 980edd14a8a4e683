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

//! Density-sorted item catalog.
//!
//! `ItemCatalog` sorts the items once, by strictly descending
//! `value / weight`, and keeps that order for the rest of the search. The
//! level of a search node is a rank in this order, and the fractional
//! relaxation is only a valid upper bound because it walks the suffix of
//! the catalog densest-first.
//!
//! Densities are compared by cross-multiplication in `i128`
//! (`v_a * w_b` vs `v_b * w_a`), so the order is exact for any 64-bit
//! input. Items of equal density keep their relative input order. This
//! only affects the traversal path of the search, never the optimum.

use crate::{
    error::{InvalidItemError, InvalidItemReason, ModelError},
    index::{ItemIndex, RankIndex},
    item::Item,
};
use num_traits::{PrimInt, Signed};
use satchel_core::num::{convert::Widen, ops::CheckedAddVal};

/// Items sorted by descending value density.
///
/// Data is stored as a Structure of Arrays indexed by `RankIndex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCatalog<T> {
    weights: Vec<T>,
    values: Vec<T>,
    /// `origins[r]` is the input position of the item with rank `r`.
    origins: Vec<ItemIndex>,
    total_weight: T,
    total_value: T,
}

impl<T> ItemCatalog<T>
where
    T: PrimInt + Signed + Widen + CheckedAddVal,
{
    /// Validates and sorts the given items.
    ///
    /// # Errors
    ///
    /// - `ModelError::InvalidItem` for the first item whose weight or value
    ///   is not positive.
    /// - `ModelError::TotalOverflow` if the sum of all weights or values does
    ///   not fit into `T`.
    pub fn new(items: &[Item<T>]) -> Result<Self, ModelError> {
        let mut total_weight = T::zero();
        let mut total_value = T::zero();

        for (i, item) in items.iter().enumerate() {
            let reason = if item.weight() <= T::zero() {
                Some(InvalidItemReason::NonPositiveWeight)
            } else if item.value() <= T::zero() {
                Some(InvalidItemReason::NonPositiveValue)
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(ModelError::InvalidItem(InvalidItemError {
                    index: ItemIndex::new(i),
                    weight: item.weight().widen(),
                    value: item.value().widen(),
                    reason,
                }));
            }

            total_weight = total_weight
                .checked_add_val(item.weight())
                .ok_or(ModelError::TotalOverflow { quantity: "weight" })?;
            total_value = total_value
                .checked_add_val(item.value())
                .ok_or(ModelError::TotalOverflow { quantity: "value" })?;
        }

        let mut order: Vec<usize> = (0..items.len()).collect();
        // Stable: equal densities keep input order.
        order.sort_by(|&a, &b| items[b].cmp_density(&items[a]));

        let mut weights = Vec::with_capacity(items.len());
        let mut values = Vec::with_capacity(items.len());
        let mut origins = Vec::with_capacity(items.len());
        for i in order {
            weights.push(items[i].weight());
            values.push(items[i].value());
            origins.push(ItemIndex::new(i));
        }

        Ok(Self {
            weights,
            values,
            origins,
            total_weight,
            total_value,
        })
    }

    /// Validates and sorts `(weight, value)` pairs.
    #[inline]
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, ModelError> {
        let items: Vec<Item<T>> = pairs.iter().map(|&p| Item::from(p)).collect();
        Self::new(&items)
    }
}

impl<T> ItemCatalog<T>
where
    T: Copy,
{
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the weight of the item at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    #[inline]
    pub fn weight(&self, rank: RankIndex) -> T {
        let index = rank.get();
        debug_assert!(
            index < self.num_items(),
            "called `ItemCatalog::weight` with rank out of bounds: the len is {} but the rank is {}",
            self.num_items(),
            index
        );
        self.weights[index]
    }

    /// Returns the value of the item at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    #[inline]
    pub fn value(&self, rank: RankIndex) -> T {
        let index = rank.get();
        debug_assert!(
            index < self.num_items(),
            "called `ItemCatalog::value` with rank out of bounds: the len is {} but the rank is {}",
            self.num_items(),
            index
        );
        self.values[index]
    }

    /// Returns the input position of the item at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    #[inline]
    pub fn origin(&self, rank: RankIndex) -> ItemIndex {
        self.origins[rank.get()]
    }

    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }
}

impl<T> std::fmt::Display for ItemCatalog<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ItemCatalog(items: {}, total_weight: {}, total_value: {})",
            self.weights.len(),
            self.total_weight,
            self.total_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn ranks_to_origins(catalog: &ItemCatalog<IntegerType>) -> Vec<usize> {
        (0..catalog.num_items())
            .map(|r| catalog.origin(RankIndex::new(r)).get())
            .collect()
    }

    #[test]
    fn test_sorted_by_descending_density() {
        // densities: 3.0, 6.0, 4.0, 5.0
        let catalog =
            ItemCatalog::<IntegerType>::from_pairs(&[(10, 30), (10, 60), (30, 120), (20, 100)])
                .unwrap();

        assert_eq!(catalog.num_items(), 4);
        assert_eq!(ranks_to_origins(&catalog), vec![1, 3, 2, 0]);
        for r in 1..catalog.num_items() {
            let (a, b) = (RankIndex::new(r - 1), RankIndex::new(r));
            assert!(catalog.value(a) * catalog.weight(b) >= catalog.value(b) * catalog.weight(a));
        }
        assert_eq!(catalog.weight(RankIndex::new(0)), 10);
        assert_eq!(catalog.value(RankIndex::new(0)), 60);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let catalog =
            ItemCatalog::<IntegerType>::from_pairs(&[(2, 4), (1, 5), (3, 6), (4, 8)]).unwrap();
        assert_eq!(ranks_to_origins(&catalog), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_exact_ordering_for_nearly_equal_densities() {
        // 1_000_000_000 / 999_999_999 is the denser item; the two densities
        // differ only beyond the ninth decimal.
        let catalog = ItemCatalog::<IntegerType>::from_pairs(&[
            (1_000_000_000, 1_000_000_001),
            (999_999_999, 1_000_000_000),
        ])
        .unwrap();
        assert_eq!(ranks_to_origins(&catalog), vec![1, 0]);
    }

    #[test]
    fn test_totals() {
        let catalog =
            ItemCatalog::<IntegerType>::from_pairs(&[(10, 60), (20, 100), (30, 120)]).unwrap();
        assert_eq!(catalog.total_weight(), 60);
        assert_eq!(catalog.total_value(), 280);
    }

    #[test]
    fn test_rejects_zero_weight() {
        let err = ItemCatalog::<IntegerType>::from_pairs(&[(5, 5), (0, 10)]).unwrap_err();
        match err {
            ModelError::InvalidItem(e) => {
                assert_eq!(e.index, ItemIndex::new(1));
                assert_eq!(e.reason, InvalidItemReason::NonPositiveWeight);
                assert_eq!(e.weight, 0);
                assert_eq!(e.value, 10);
            }
            other => panic!("expected InvalidItem, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_weight_and_non_positive_value() {
        let err = ItemCatalog::<IntegerType>::from_pairs(&[(-1, 10)]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidItem(InvalidItemError {
                reason: InvalidItemReason::NonPositiveWeight,
                ..
            })
        ));

        let err = ItemCatalog::<IntegerType>::from_pairs(&[(3, 0)]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidItem(InvalidItemError {
                reason: InvalidItemReason::NonPositiveValue,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_total_overflow() {
        let err = ItemCatalog::<i8>::from_pairs(&[(100, 1), (100, 1)]).unwrap_err();
        assert_eq!(err, ModelError::TotalOverflow { quantity: "weight" });
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ItemCatalog::<IntegerType>::from_pairs(&[]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.num_items(), 0);
        assert_eq!(catalog.total_weight(), 0);
        assert_eq!(catalog.total_value(), 0);
    }
}
