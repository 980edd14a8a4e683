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

use crate::{
    catalog::ItemCatalog,
    index::{ItemIndex, RankIndex},
};
use num_traits::{PrimInt, Signed};

/// The items taken by a solution, in input terms.
///
/// `items` holds input positions in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    /// The total value of the taken items.
    objective_value: T,
    /// The total weight of the taken items.
    total_weight: T,
    items: Vec<ItemIndex>,
}

impl<T> Selection<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Selection`. `items` is sorted and deduplicated.
    pub fn new(objective_value: T, total_weight: T, mut items: Vec<ItemIndex>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self {
            objective_value,
            total_weight,
            items,
        }
    }

    /// The empty selection, which is feasible for every capacity.
    #[inline]
    pub fn empty() -> Self {
        Self {
            objective_value: T::zero(),
            total_weight: T::zero(),
            items: Vec::new(),
        }
    }

    /// Builds a selection from catalog ranks, summing weights and values.
    ///
    /// Sums cannot overflow: the catalog verified that the totals over all
    /// items fit into `T`.
    pub fn from_ranks<I>(catalog: &ItemCatalog<T>, ranks: I) -> Self
    where
        I: IntoIterator<Item = RankIndex>,
    {
        let mut objective_value = T::zero();
        let mut total_weight = T::zero();
        let mut items = Vec::new();
        for rank in ranks {
            objective_value = objective_value + catalog.value(rank);
            total_weight = total_weight + catalog.weight(rank);
            items.push(catalog.origin(rank));
        }
        Self::new(objective_value, total_weight, items)
    }

    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// Input positions of the taken items, ascending.
    #[inline]
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: ItemIndex) -> bool {
        self.items.binary_search(&item).is_ok()
    }
}

impl<T> Default for Selection<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f, "   Total Weight:    {}", self.total_weight)?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "   (No items taken)")?;
            return Ok(());
        }

        write!(f, "   Items:")?;
        for item in &self.items {
            write!(f, " {}", item.get())?;
        }
        writeln!(f)
    }
}
