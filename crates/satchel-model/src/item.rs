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

use num_traits::{PrimInt, Signed};
use satchel_core::num::convert::Widen;

/// A knapsack item. Immutable once loaded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Item<T> {
    weight: T,
    value: T,
}

impl<T> Item<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new item. No validation happens here; the catalog rejects
    /// non-positive weights and values.
    #[inline]
    pub const fn new(weight: T, value: T) -> Self {
        Self { weight, value }
    }

    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Compares `value / weight` of both items without dividing.
    ///
    /// Cross-multiplies in `i128`, so the result is exact for every 64-bit
    /// input. Only meaningful for items with positive weights.
    #[inline]
    pub fn cmp_density(&self, other: &Self) -> std::cmp::Ordering
    where
        T: Widen,
    {
        let lhs = self.value.widen() * other.weight.widen();
        let rhs = other.value.widen() * self.weight.widen();
        lhs.cmp(&rhs)
    }
}

impl<T> From<(T, T)> for Item<T>
where
    T: PrimInt + Signed,
{
    /// Builds an item from a `(weight, value)` pair.
    #[inline]
    fn from((weight, value): (T, T)) -> Self {
        Self::new(weight, value)
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(weight: {}, value: {})", self.weight, self.value)
    }
}
