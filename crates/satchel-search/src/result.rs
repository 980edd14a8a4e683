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

//! Solver results.
//!
//! A knapsack instance always has a feasible answer (take nothing), so a
//! result always carries a `Selection`. The variants differ in what was
//! proven about it.

use crate::stats::SolverStatistics;
use num_traits::{PrimInt, Signed};
use satchel_model::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// The search space was exhausted; no selection is better.
    Optimal(Selection<T>),
    /// The best selection found before the search was stopped. Not proven
    /// optimal.
    Feasible(Selection<T>),
}

impl<T> SolverResult<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        match self {
            SolverResult::Optimal(selection) | SolverResult::Feasible(selection) => selection,
        }
    }

    #[inline]
    pub fn into_selection(self) -> Selection<T> {
        match self {
            SolverResult::Optimal(selection) | SolverResult::Feasible(selection) => selection,
        }
    }

    #[inline]
    pub fn objective_value(&self) -> T {
        self.selection().objective_value()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(selection) => {
                write!(f, "Optimal(objective={})", selection.objective_value())
            }
            SolverResult::Feasible(selection) => {
                write!(f, "Feasible(objective={})", selection.objective_value())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier ran empty.
    OptimalityProven,
    /// The solver aborted due to a search limit (time, nodes, interrupt).
    /// The string describes the limit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    pub result: SolverResult<T>,
    pub reason: TerminationReason,
    pub statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(
        result: SolverResult<T>,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.result.is_optimal()
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }

    #[inline]
    pub fn objective_value(&self) -> T {
        self.result.objective_value()
    }

    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        self.result.selection()
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}
