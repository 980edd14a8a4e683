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

use crate::{catalog::ItemCatalog, error::ModelError, item::Item};
use num_traits::{PrimInt, Signed};
use satchel_core::num::{convert::Widen, ops::CheckedAddVal};

/// A validated 0/1 knapsack instance: a density-sorted catalog and a
/// non-negative capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem<T> {
    catalog: ItemCatalog<T>,
    capacity: T,
}

impl<T> Problem<T>
where
    T: PrimInt + Signed + Widen + CheckedAddVal,
{
    /// Constructs a new `Problem`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidCapacity` if `capacity` is negative.
    pub fn new(catalog: ItemCatalog<T>, capacity: T) -> Result<Self, ModelError> {
        if capacity < T::zero() {
            return Err(ModelError::InvalidCapacity {
                capacity: capacity.widen(),
            });
        }
        Ok(Self { catalog, capacity })
    }

    /// Validates the items, sorts them and attaches the capacity.
    #[inline]
    pub fn from_items(items: &[Item<T>], capacity: T) -> Result<Self, ModelError> {
        Self::new(ItemCatalog::new(items)?, capacity)
    }

    /// Same as `from_items`, from `(weight, value)` pairs.
    #[inline]
    pub fn from_pairs(pairs: &[(T, T)], capacity: T) -> Result<Self, ModelError> {
        Self::new(ItemCatalog::from_pairs(pairs)?, capacity)
    }
}

impl<T> Problem<T>
where
    T: Copy,
{
    #[inline]
    pub fn catalog(&self) -> &ItemCatalog<T> {
        &self.catalog
    }

    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    #[inline]
    pub fn num_items(&self) -> usize {
        self.catalog.num_items()
    }
}

impl<T> std::fmt::Display for Problem<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Problem(capacity: {}, {})", self.capacity, self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_capacity() {
        let err = Problem::<i64>::from_pairs(&[(1, 1)], -1).unwrap_err();
        assert_eq!(err, ModelError::InvalidCapacity { capacity: -1 });
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        let problem = Problem::<i64>::from_pairs(&[(1, 1)], 0).unwrap();
        assert_eq!(problem.capacity(), 0);
        assert_eq!(problem.num_items(), 1);
    }

    #[test]
    fn test_item_errors_surface_through_problem() {
        let err = Problem::<i64>::from_pairs(&[(0, 10)], 5).unwrap_err();
        assert!(matches!(err, ModelError::InvalidItem(_)));
    }

    fn plain_accessors<T: Copy>(problem: &Problem<T>) -> (usize, T) {
        (problem.num_items(), problem.capacity())
    }

    #[test]
    fn test_accessors_need_no_arithmetic_bounds() {
        let problem = Problem::<i64>::from_pairs(&[(1, 1), (2, 3)], 4).unwrap();
        assert_eq!(plain_accessors(&problem), (2, 4));
        assert_eq!(problem.catalog().num_items(), 2);
    }
}
