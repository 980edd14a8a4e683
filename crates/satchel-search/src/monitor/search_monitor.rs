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

//! Search-level monitoring
//!
//! `SearchMonitor` sees a solve at the granularity every strategy shares:
//! entering and leaving the search over a `Problem`, one step per expanded
//! node, and every improving `Selection`. Budgets that do not depend on the
//! shape of the search tree (wall clock, number of improving selections)
//! live at this level so every portfolio worker can honor them.
//!
//! All hooks default to doing nothing, and `()` is the monitor that
//! observes nothing.

use num_traits::{PrimInt, Signed};
use satchel_model::{problem::Problem, selection::Selection};

/// What a monitor asks the search to do next.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    /// Stop and report the best selection found so far as feasible, with
    /// the given reason.
    Terminate(String),
}

impl SearchCommand {
    #[inline]
    pub fn terminate<R>(reason: R) -> Self
    where
        R: Into<String>,
    {
        SearchCommand::Terminate(reason.into())
    }

    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, SearchCommand::Continue)
    }
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Lifecycle hooks every search strategy reports to.
pub trait SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str;
    /// Called once before the first step, with the problem being solved.
    fn on_enter_search(&mut self, _problem: &Problem<T>) {}
    fn on_exit_search(&mut self) {}
    /// Called whenever the strategy finds a selection with a higher profit
    /// than any it found before.
    fn on_solution_found(&mut self, _selection: &Selection<T>) {}
    /// Called once per expanded node.
    fn on_step(&mut self) {}
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T> SearchMonitor<T> for ()
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "none"
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
