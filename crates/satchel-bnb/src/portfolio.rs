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
    bnb::BnbSolver,
    bound::{BoundEstimator, FractionalBound},
    frontier::FrontierKind,
    monitor::{
        node_limit::NodeLimitMonitor, tree_search_monitor::TreeSearchMonitor,
        wrapper::WrapperMonitor,
    },
    stats::BnbSolverStatistics,
};
use num_traits::{PrimInt, Signed};
use satchel_search::{
    monitor::search_monitor::SearchCommand,
    num::SolverNumeric,
    portfolio::{PortfolioSolver, PortfolioSolverContext, PortfolioSolverResult},
};
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs a `BnbSolver` as one worker of a portfolio. The worker prunes
/// against the shared incumbent and stops once the shared stop flag is set
/// or its own node limit, if any, is reached.
#[derive(Clone, Debug)]
pub struct BnbPortfolioSolver<E = FractionalBound> {
    inner: BnbSolver,
    estimator: E,
    node_limit: Option<u64>,
    name: String,
}

impl BnbPortfolioSolver<FractionalBound> {
    #[inline]
    pub fn new(frontier: FrontierKind) -> Self {
        Self::with_estimator(frontier, FractionalBound)
    }
}

impl<E> BnbPortfolioSolver<E> {
    #[inline]
    pub fn with_estimator(frontier: FrontierKind, estimator: E) -> Self {
        Self {
            inner: BnbSolver::with_frontier(frontier),
            estimator,
            node_limit: None,
            name: format!("BnbPortfolioSolver({})", frontier),
        }
    }

    /// Stops this worker after `node_limit` expansions.
    #[inline]
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    #[inline]
    pub fn inner(&self) -> &BnbSolver {
        &self.inner
    }

    #[inline]
    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl<T, E> PortfolioSolver<T> for BnbPortfolioSolver<E>
where
    T: SolverNumeric,
    E: BoundEstimator<T> + Send,
{
    fn solve<'a>(&mut self, context: PortfolioSolverContext<'a, T>) -> PortfolioSolverResult<T> {
        let monitor = (
            StopFlag(context.stop),
            (
                self.node_limit.map(NodeLimitMonitor::new),
                WrapperMonitor::new(context.monitor),
            ),
        );

        let outcome = self.inner.solve_with_estimator_and_incumbent(
            context.problem,
            &self.estimator,
            monitor,
            context.incumbent,
        );

        outcome.into()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ends the worker once the portfolio's stop flag is raised, which happens
/// when another worker proved optimality or a shared limit was reached.
struct StopFlag<'a>(&'a AtomicBool);

impl<T> TreeSearchMonitor<T> for StopFlag<'_>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "StopFlag"
    }

    fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
        if self.0.load(Ordering::Relaxed) {
            SearchCommand::terminate("portfolio stop flag raised")
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::problem::Problem;
    use satchel_search::{
        incumbent::SharedIncumbent,
        monitor::composite::CompositeMonitor,
        result::{SolverResult, TerminationReason},
    };

    type IntegerType = i64;

    fn problem() -> Problem<IntegerType> {
        Problem::from_pairs(&[(10, 60), (20, 100), (30, 120)], 50).expect("valid problem")
    }

    #[test]
    fn test_portfolio_bnb_solver_finds_optimal_selection() {
        let problem = problem();
        for frontier in FrontierKind::ALL {
            let mut solver = BnbPortfolioSolver::new(frontier);
            let incumbent = SharedIncumbent::<IntegerType>::new();
            let mut monitor = CompositeMonitor::<IntegerType>::new();
            let stop = AtomicBool::new(false);
            let context = PortfolioSolverContext::new(&problem, &incumbent, &mut monitor, &stop);

            let result = solver.solve(context);
            match result.result() {
                SolverResult::Optimal(selection) => assert_eq!(selection.objective_value(), 220),
                other => panic!("expected Optimal, got {:?}", other),
            }
            assert_eq!(
                result.termination_reason(),
                &TerminationReason::OptimalityProven
            );
            assert_eq!(incumbent.lower_bound(), 220);
        }
    }

    #[test]
    fn test_raised_stop_flag_aborts_immediately() {
        let problem = problem();
        let mut solver = BnbPortfolioSolver::new(FrontierKind::BestFirst);
        let incumbent = SharedIncumbent::<IntegerType>::new();
        let mut monitor = CompositeMonitor::<IntegerType>::new();
        let stop = AtomicBool::new(true);
        let context = PortfolioSolverContext::new(&problem, &incumbent, &mut monitor, &stop);

        let result = solver.solve(context);
        assert!(matches!(result.result(), SolverResult::Feasible(_)));
        assert_eq!(
            result.termination_reason(),
            &TerminationReason::Aborted("portfolio stop flag raised".to_string())
        );
        assert_eq!(result.nodes_expanded(), 0);
    }

    #[test]
    fn test_stop_flag_outranks_node_limit() {
        let problem = problem();
        let mut solver = BnbPortfolioSolver::new(FrontierKind::Lifo).with_node_limit(0);
        let incumbent = SharedIncumbent::<IntegerType>::new();
        let mut monitor = CompositeMonitor::<IntegerType>::new();
        let stop = AtomicBool::new(true);
        let context = PortfolioSolverContext::new(&problem, &incumbent, &mut monitor, &stop);

        match solver.solve(context).termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "portfolio stop flag raised"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_node_limit_aborts_worker() {
        let problem = problem();
        let mut solver = BnbPortfolioSolver::new(FrontierKind::Fifo).with_node_limit(1);
        assert_eq!(solver.node_limit(), Some(1));

        let incumbent = SharedIncumbent::<IntegerType>::new();
        let mut monitor = CompositeMonitor::<IntegerType>::new();
        let stop = AtomicBool::new(false);
        let context = PortfolioSolverContext::new(&problem, &incumbent, &mut monitor, &stop);

        let result = solver.solve(context);
        match result.termination_reason() {
            TerminationReason::Aborted(msg) => assert!(msg.contains("node limit")),
            other => panic!("expected Aborted, got {:?}", other),
        }
        assert_eq!(result.result().objective_value(), 60);
    }

    #[test]
    fn test_name_reflects_frontier() {
        let solver = BnbPortfolioSolver::new(FrontierKind::Lifo);
        assert_eq!(
            PortfolioSolver::<IntegerType>::name(&solver),
            "BnbPortfolioSolver(lifo)"
        );
    }
}
