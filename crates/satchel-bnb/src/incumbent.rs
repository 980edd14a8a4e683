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

//! Incumbent management for branch-and-bound
//!
//! Declares `IncumbentStore<T>`, a minimal interface to read and raise the
//! best known profit (the lower bound used for pruning) and to publish new
//! selections during search. This abstracts over local (single-threaded)
//! and shared (portfolio) use.
//!
//! Implementations
//! - `NoSharedIncumbent<T>`: local only. Starts at `0`, `tighten(x) = x`,
//!   and publishing is a no-op.
//! - `SharedIncumbentAdapter<'a, T>`: wraps
//!   `satchel_search::incumbent::SharedIncumbent<T>`; `tighten(x)` returns
//!   `max(shared, x)` and publishing attempts installation.

use satchel_model::selection::Selection;
use satchel_search::{incumbent::SharedIncumbent, num::SolverNumeric};
use std::marker::PhantomData;

/// Trait for managing incumbent selections in a branch-and-bound solver.
pub trait IncumbentStore<T>
where
    T: SolverNumeric,
{
    /// Returns the profit the search starts from.
    fn initial_lower_bound(&self) -> T;
    /// Synchronizes the local best profit with the backing store. Never
    /// returns less than `current_local_best`.
    fn tighten(&self, current_local_best: T) -> T;
    /// Notifies the backing store that a better selection has been found.
    fn on_solution_found(&self, selection: &Selection<T>);
    /// The best selection known to the backing store, if it keeps one.
    fn best_known(&self) -> Option<Selection<T>>;
}

/// Does not share the incumbent between solver instances. Use this for
/// single-threaded or isolated solving.
#[repr(transparent)]
pub struct NoSharedIncumbent<T>(PhantomData<T>);

impl<T> Default for NoSharedIncumbent<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NoSharedIncumbent<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> IncumbentStore<T> for NoSharedIncumbent<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn initial_lower_bound(&self) -> T {
        T::zero()
    }

    #[inline(always)]
    fn tighten(&self, current_local_best: T) -> T {
        current_local_best
    }

    #[inline(always)]
    fn on_solution_found(&self, _: &Selection<T>) {}

    #[inline(always)]
    fn best_known(&self) -> Option<Selection<T>> {
        None
    }
}

/// Shares the incumbent between solver instances through a
/// `SharedIncumbent`.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct SharedIncumbentAdapter<'a, T> {
    inner: &'a SharedIncumbent<T>,
}

impl<'a, T> SharedIncumbentAdapter<'a, T> {
    #[inline(always)]
    pub fn new(inner: &'a SharedIncumbent<T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> IncumbentStore<T> for SharedIncumbentAdapter<'a, T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn initial_lower_bound(&self) -> T {
        self.inner.lower_bound_as().unwrap_or_else(T::zero)
    }

    #[inline(always)]
    fn tighten(&self, current_local_best: T) -> T {
        match self.inner.lower_bound_as() {
            Some(shared) => shared.max(current_local_best),
            None => current_local_best,
        }
    }

    #[inline(always)]
    fn on_solution_found(&self, selection: &Selection<T>) {
        self.inner.try_install(selection);
    }

    #[inline(always)]
    fn best_known(&self) -> Option<Selection<T>> {
        self.inner.snapshot()
    }
}
