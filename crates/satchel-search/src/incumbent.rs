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

//! # Shared Incumbent (Best Selection Holder)
//!
//! A concurrent container for the best selection discovered so far during
//! search. It exposes a fast, lock-free lower bound via an atomic and stores
//! the actual `Selection<T>` behind a `Mutex` as the source of truth.
//!
//! ## Highlights
//!
//! - The lower bound starts at `0`: taking nothing is always feasible.
//! - The lower bound only rises. It is updated with `fetch_max`, so
//!   concurrent writers can never lower it.
//! - `try_install(&Selection<T>) -> bool` installs strictly better
//!   candidates, updating both the snapshot and the lower bound. Every
//!   published profit is backed by a stored selection.
//!
//! ## Usage
//!
//! ```rust
//! use satchel_search::incumbent::SharedIncumbent;
//! use satchel_model::selection::Selection;
//!
//! let inc: SharedIncumbent<i64> = SharedIncumbent::new();
//! let candidate = Selection::new(100, 10, Vec::new());
//!
//! assert!(inc.try_install(&candidate));
//! assert_eq!(inc.lower_bound(), 100);
//! assert_eq!(inc.snapshot().map(|s| s.objective_value()), Some(100));
//! ```

use num_traits::{PrimInt, Signed};
use satchel_model::selection::Selection;
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicI64, Ordering},
};

/// A concurrent holder for the best (incumbent) selection found during search.
///
/// The lower bound is read with `Ordering::Relaxed`; it only serves to prune
/// and to short-circuit obviously worse candidates. The selection and its
/// objective are synchronized via the `Mutex`.
#[derive(Debug)]
pub struct SharedIncumbent<T> {
    /// Profit of the incumbent, as `i64` for atomic access.
    lower_bound: AtomicI64,
    /// The incumbent selection. `None` until a non-empty selection is installed.
    selection: Mutex<Option<Selection<T>>>,
}

impl<T> Default for SharedIncumbent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(lower_bound: {})", self.lower_bound())
    }
}

impl<T> SharedIncumbent<T> {
    /// Creates a new shared incumbent with profit `0` and no selection.
    #[inline]
    pub fn new() -> Self {
        SharedIncumbent {
            lower_bound: AtomicI64::new(0),
            selection: Mutex::new(None),
        }
    }

    /// Returns the best profit published so far.
    #[inline]
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound.load(Ordering::Relaxed)
    }

    /// Returns the current lower bound converted to `T`.
    #[inline]
    pub fn lower_bound_as(&self) -> Option<T>
    where
        T: num_traits::FromPrimitive,
    {
        T::from_i64(self.lower_bound())
    }

    /// Returns a snapshot of the current incumbent selection, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<Selection<T>>
    where
        T: Clone,
    {
        let guard = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Attempts to install `candidate` as the new incumbent.
    /// Returns `true` if the candidate was installed.
    pub fn try_install(&self, candidate: &Selection<T>) -> bool
    where
        T: PrimInt + Signed + Into<i64>,
    {
        let candidate_objective: i64 = candidate.objective_value().into();

        let mut guard = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = guard.as_ref() {
            let current_objective: i64 = current.objective_value().into();
            if candidate_objective <= current_objective {
                return false;
            }
        } else if candidate_objective <= 0 {
            return false;
        }

        *guard = Some(candidate.clone());
        self.lower_bound.fetch_max(candidate_objective, Ordering::Relaxed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::SharedIncumbent;
    use satchel_model::{index::ItemIndex, selection::Selection};
    use std::sync::Arc;
    use std::thread;

    fn make_selection(objective: i64, n: usize) -> Selection<i64> {
        let items = (0..n).map(ItemIndex::new).collect::<Vec<_>>();
        Selection::new(objective, n as i64, items)
    }

    #[test]
    fn test_initial_state() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert_eq!(inc.lower_bound(), 0);
        assert_eq!(inc.lower_bound_as(), Some(0));
        assert!(inc.snapshot().is_none());
    }

    #[test]
    fn test_install_better_selection_updates_bound_and_snapshot() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert!(inc.try_install(&make_selection(100, 3)));
        assert_eq!(inc.lower_bound(), 100);

        let snap = inc.snapshot().expect("snapshot should be Some");
        assert_eq!(snap.objective_value(), 100);
        assert_eq!(snap.num_items(), 3);
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert!(!inc.try_install(&make_selection(0, 0)));

        assert!(inc.try_install(&make_selection(100, 2)));
        assert!(!inc.try_install(&make_selection(50, 2)));
        assert!(!inc.try_install(&make_selection(100, 1)));
        assert_eq!(inc.lower_bound(), 100);
        assert_eq!(inc.snapshot().unwrap().num_items(), 2);
    }

    #[test]
    fn test_narrow_profit_type_round_trips_through_lower_bound() {
        let inc: SharedIncumbent<i16> = SharedIncumbent::new();
        assert!(inc.try_install(&Selection::new(40i16, 1, Vec::new())));
        assert!(!inc.try_install(&Selection::new(30i16, 1, Vec::new())));
        assert_eq!(inc.lower_bound(), 40);
        assert_eq!(inc.lower_bound_as(), Some(40i16));
    }

    #[test]
    fn test_concurrent_installs_maximum_wins() {
        let inc = Arc::new(SharedIncumbent::<i64>::new());
        let objectives = vec![300, 200, 400, 50, 120, 75, 500, 60, 90];

        let handles = objectives
            .iter()
            .cloned()
            .map(|obj| {
                let inc = Arc::clone(&inc);
                thread::spawn(move || inc.try_install(&make_selection(obj, 4)))
            })
            .collect::<Vec<_>>();

        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(results.iter().any(|&r| r));

        let max_obj = *objectives.iter().max().unwrap();
        assert_eq!(inc.lower_bound(), max_obj);
        assert_eq!(inc.snapshot().unwrap().objective_value(), max_obj);
    }

    #[test]
    fn test_lower_bound_is_monotonic_under_concurrent_installs() {
        let inc = SharedIncumbent::<i64>::new();
        thread::scope(|s| {
            for t in 0..4i64 {
                let inc = &inc;
                s.spawn(move || {
                    let mut last_seen = 0;
                    for v in 0..250i64 {
                        inc.try_install(&make_selection(v * 4 + t, 1));
                        let now = inc.lower_bound();
                        assert!(now >= last_seen, "lower bound decreased");
                        last_seen = now;
                    }
                });
            }
        });
        assert_eq!(inc.lower_bound(), 249 * 4 + 3);
        assert_eq!(
            inc.snapshot().map(|s| s.objective_value()),
            Some(249 * 4 + 3)
        );
    }
}
