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

use crate::stats::BnbSolverStatistics;
use num_traits::{PrimInt, Signed};
use satchel_model::selection::Selection;
use satchel_search::{
    portfolio::PortfolioSolverResult,
    result::{SolverResult, TerminationReason},
};

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
}

impl<T> BnbSolverOutcome<T> {
    /// The frontier ran dry; `selection` is provably optimal.
    #[inline]
    pub fn optimal(selection: Selection<T>, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// A monitor stopped the search; `selection` is the best one found so far.
    #[inline]
    pub fn aborted<R>(selection: Selection<T>, reason: R, statistics: BnbSolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(selection),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::OptimalityProven)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Aborted(_))
    }
}

impl<T> BnbSolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        self.result.selection()
    }

    /// The best profit found.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.result.objective_value()
    }
}

impl<T> std::fmt::Display for BnbSolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}

impl<T> From<BnbSolverOutcome<T>> for PortfolioSolverResult<T>
where
    T: PrimInt + Signed,
{
    fn from(val: BnbSolverOutcome<T>) -> Self {
        let (created, expanded) = (val.statistics.nodes_created, val.statistics.nodes_expanded);
        let selection = val.result.into_selection();
        let result = match val.termination_reason {
            TerminationReason::OptimalityProven => PortfolioSolverResult::optimal(selection),
            TerminationReason::Aborted(reason) => PortfolioSolverResult::aborted(selection, reason),
        };
        result.with_node_counts(created, expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn selection(objective: IntegerType) -> Selection<IntegerType> {
        Selection::new(objective, 1, vec![])
    }

    #[test]
    fn test_into_portfolio_optimal() {
        let statistics = BnbSolverStatistics {
            nodes_created: 7,
            nodes_expanded: 3,
            ..BnbSolverStatistics::default()
        };
        let outcome = BnbSolverOutcome::optimal(selection(220), statistics);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.objective_value(), 220);

        let portfolio: PortfolioSolverResult<IntegerType> = outcome.into();
        assert!(matches!(portfolio.result(), SolverResult::Optimal(s) if s.objective_value() == 220));
        assert_eq!(
            portfolio.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(portfolio.nodes_created(), 7);
        assert_eq!(portfolio.nodes_expanded(), 3);
    }

    #[test]
    fn test_into_portfolio_aborted_keeps_reason_and_selection() {
        let outcome =
            BnbSolverOutcome::aborted(selection(7), "time limit", BnbSolverStatistics::default());
        assert!(outcome.is_aborted());
        assert!(!outcome.is_optimal());

        let portfolio: PortfolioSolverResult<IntegerType> = outcome.into();
        assert!(matches!(portfolio.result(), SolverResult::Feasible(s) if s.objective_value() == 7));
        match portfolio.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }
}
