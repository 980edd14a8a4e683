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

//! Branch-and-bound engine for the 0/1 knapsack problem.
//!
//! The engine grows a binary decision tree over the density-sorted catalog:
//! the node at level `k` has decided items `0..=k`, and expanding it creates
//! an include child and an exclude child for item `k + 1`. Every child is
//! bounded once on creation and admitted to the frontier only if its bound
//! beats the incumbent. Feasible include children are offered to the
//! incumbent before and independently of that check.
//!
//! The frontier discipline decides the order of expansion (`FrontierKind`),
//! never the result. When the frontier runs dry the incumbent is optimal. A
//! monitor may stop the search early, in which case the best selection found
//! so far is returned as a best-effort `Feasible` result.
//!
//! A search session object encapsulates per-run state, statistics, and
//! timing, so a `BnbSolver` can be reused across problems.

use crate::{
    bound::{BoundEstimator, FractionalBound, RelaxationBound},
    frontier::{BestFirstFrontier, FifoFrontier, Frontier, FrontierKind, LifoFrontier},
    incumbent::{IncumbentStore, NoSharedIncumbent, SharedIncumbentAdapter},
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    result::BnbSolverOutcome,
    stats::BnbSolverStatistics,
};
use satchel_model::{problem::Problem, selection::Selection};
use satchel_search::{
    incumbent::SharedIncumbent, monitor::search_monitor::SearchCommand, num::SolverNumeric,
    result::TerminationReason,
};

/// A best-first, breadth-first or depth-first branch-and-bound solver for
/// the 0/1 knapsack problem. The bound is supplied by a `BoundEstimator`;
/// `FractionalBound` is used unless another estimator is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BnbSolver {
    frontier: FrontierKind,
}

impl BnbSolver {
    /// Creates a solver with the default best-first frontier.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver expanding nodes in the order of `frontier`.
    #[inline]
    pub fn with_frontier(frontier: FrontierKind) -> Self {
        Self { frontier }
    }

    #[inline]
    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }

    /// Solve `problem` with the fractional bound. This variant does not
    /// use a shared incumbent and thus acts as a standalone, single
    /// threaded solver.
    #[inline]
    pub fn solve<T, S>(&self, problem: &Problem<T>, monitor: S) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        S: TreeSearchMonitor<T>,
    {
        self.solve_internal(
            problem,
            &FractionalBound,
            monitor,
            NoSharedIncumbent::new(),
        )
    }

    /// Solve `problem` with a custom bound estimator.
    #[inline]
    pub fn solve_with_estimator<T, E, S>(
        &self,
        problem: &Problem<T>,
        estimator: &E,
        monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        E: BoundEstimator<T>,
        S: TreeSearchMonitor<T>,
    {
        self.solve_internal(problem, estimator, monitor, NoSharedIncumbent::new())
    }

    /// Solve `problem` while synchronizing the best known selection with
    /// other solver instances through `incumbent`. Profits published by
    /// other instances are used for pruning.
    #[inline]
    pub fn solve_with_incumbent<T, S>(
        &self,
        problem: &Problem<T>,
        monitor: S,
        incumbent: &SharedIncumbent<T>,
    ) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        S: TreeSearchMonitor<T>,
    {
        self.solve_internal(
            problem,
            &FractionalBound,
            monitor,
            SharedIncumbentAdapter::new(incumbent),
        )
    }

    /// Solve `problem` with a custom bound estimator and a shared incumbent.
    #[inline]
    pub fn solve_with_estimator_and_incumbent<T, E, S>(
        &self,
        problem: &Problem<T>,
        estimator: &E,
        monitor: S,
        incumbent: &SharedIncumbent<T>,
    ) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        E: BoundEstimator<T>,
        S: TreeSearchMonitor<T>,
    {
        self.solve_internal(
            problem,
            estimator,
            monitor,
            SharedIncumbentAdapter::new(incumbent),
        )
    }

    #[inline(always)]
    fn solve_internal<T, E, S, I>(
        &self,
        problem: &Problem<T>,
        estimator: &E,
        mut monitor: S,
        backing: I,
    ) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        E: BoundEstimator<T>,
        S: TreeSearchMonitor<T>,
        I: IncumbentStore<T>,
    {
        let num_items = problem.num_items();
        match self.frontier {
            FrontierKind::Fifo => BnbSolverSearchSession::new(
                problem,
                FifoFrontier::with_capacity(num_items),
                estimator,
                &mut monitor,
                backing,
            )
            .run(),
            FrontierKind::Lifo => BnbSolverSearchSession::new(
                problem,
                LifoFrontier::preallocated(num_items),
                estimator,
                &mut monitor,
                backing,
            )
            .run(),
            FrontierKind::BestFirst => BnbSolverSearchSession::new(
                problem,
                BestFirstFrontier::with_capacity(num_items),
                estimator,
                &mut monitor,
                backing,
            )
            .run(),
        }
    }
}

impl std::fmt::Display for BnbSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BnbSolver(frontier: {})", self.frontier)
    }
}

/// A search session for the branch-and-bound solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, T, F, E, S, I>
where
    T: SolverNumeric,
    I: IncumbentStore<T>,
{
    problem: &'a Problem<T>,
    frontier: F,
    estimator: &'a E,
    monitor: &'a mut S,
    incumbent: I,
    best_objective: T,
    best_selection: Selection<T>,
    stats: BnbSolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, F, E, S, I> std::fmt::Debug for BnbSolverSearchSession<'a, T, F, E, S, I>
where
    T: SolverNumeric,
    F: Frontier<T>,
    I: IncumbentStore<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("problem", &self.problem)
            .field("frontier", &self.frontier.name())
            .field("frontier_len", &self.frontier.len())
            .field("best_objective", &self.best_objective)
            .field("best_selection", &self.best_selection)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, F, E, S, I> BnbSolverSearchSession<'a, T, F, E, S, I>
where
    T: SolverNumeric,
    F: Frontier<T>,
    E: BoundEstimator<T>,
    S: TreeSearchMonitor<T>,
    I: IncumbentStore<T>,
{
    /// Create a new search session.
    #[inline]
    fn new(
        problem: &'a Problem<T>,
        frontier: F,
        estimator: &'a E,
        monitor: &'a mut S,
        incumbent_backing: I,
    ) -> Self {
        let best_objective = incumbent_backing.initial_lower_bound();

        Self {
            problem,
            frontier,
            estimator,
            monitor,
            incumbent: incumbent_backing,
            best_objective,
            best_selection: Selection::empty(),
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    #[inline]
    fn run(mut self) -> BnbSolverOutcome<T> {
        self.monitor.on_enter_search(self.problem, &self.stats);
        self.initialize();

        let num_items = self.problem.num_items();
        let termination_reason = loop {
            self.best_objective = self.incumbent.tighten(self.best_objective);

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break TerminationReason::Aborted(msg);
            }

            let node = match self.frontier.pop() {
                Some(node) => node,
                None => break TerminationReason::OptimalityProven,
            };

            // The incumbent may have risen since the node was admitted.
            if !self.beats_incumbent(node.bound()) {
                self.stats.on_pruning_bound();
                self.monitor
                    .on_prune(&node, PruneReason::BoundDominated, &self.stats);
                continue;
            }

            self.monitor.on_step(&node, &self.stats);

            if node.is_leaf(num_items) {
                self.stats.on_leaf();
                self.monitor.on_leaf(&node, &self.stats);
                continue;
            }

            self.stats.on_node_expanded();
            self.expand(&node);
        };

        self.frontier.clear();
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    /// Creates, bounds and admits the root. The root is admitted
    /// regardless of its bound.
    #[inline]
    fn initialize(&mut self) {
        let root = SearchNode::root(self.problem.num_items());
        let bound = self.estimate(&root);
        let root = root.with_bound(bound);

        self.stats.on_node_created(0);
        self.stats.set_root_bound(bound);
        self.monitor.on_bound_computed(&root, &self.stats);
        self.admit(root);
    }

    /// Finalize the solver result based on the best selection found
    /// and the termination reason.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize_result(self, reason: TerminationReason) -> BnbSolverOutcome<T> {
        let mut selection = self.best_selection;
        if let Some(known) = self.incumbent.best_known() {
            if known.objective_value() > selection.objective_value() {
                selection = known;
            }
        }

        match reason {
            TerminationReason::OptimalityProven => BnbSolverOutcome::optimal(selection, self.stats),
            TerminationReason::Aborted(msg) => BnbSolverOutcome::aborted(selection, msg, self.stats),
        }
    }

    /// Creates both children of `node`, offers the include child to the
    /// incumbent, then bounds and admits each child on its own merit.
    #[inline(always)]
    fn expand(&mut self, node: &SearchNode<T>) {
        let capacity = self.problem.capacity();

        let include = node.include_child(self.problem.catalog());
        self.stats.on_node_created(include.depth() as u64);
        if include.is_feasible(capacity) {
            if include.profit() > self.best_objective {
                self.install(&include);
            }
            self.consider(include);
        } else {
            // An overfull node bounds to zero and can never be admitted.
            self.stats.on_pruning_infeasible();
            self.monitor
                .on_prune(&include, PruneReason::Infeasible, &self.stats);
        }

        let exclude = node.exclude_child();
        self.stats.on_node_created(exclude.depth() as u64);
        self.consider(exclude);
    }

    /// Bounds `child` and admits it iff the bound beats the incumbent.
    #[inline(always)]
    fn consider(&mut self, child: SearchNode<T>) {
        let bound = self.estimate(&child);
        let child = child.with_bound(bound);
        self.monitor.on_bound_computed(&child, &self.stats);

        if self.beats_incumbent(bound) {
            self.admit(child);
        } else {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&child, PruneReason::BoundDominated, &self.stats);
        }
    }

    #[inline(always)]
    fn admit(&mut self, node: SearchNode<T>) {
        let frontier_len = self.frontier.len() + 1;
        self.stats.on_frontier_len(frontier_len);
        self.monitor
            .on_node_admitted(&node, frontier_len, &self.stats);
        self.frontier.push(node);
    }

    /// Makes the feasible `node` the new incumbent.
    #[inline(always)]
    fn install(&mut self, node: &SearchNode<T>) {
        let selection = node.selection(self.problem.catalog());
        self.best_objective = node.profit();
        self.incumbent.on_solution_found(&selection);
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&selection, &self.stats);
        self.best_selection = selection;
    }

    #[inline(always)]
    fn estimate(&self, node: &SearchNode<T>) -> RelaxationBound {
        self.estimator
            .estimate(node, self.problem.capacity(), self.problem.catalog())
    }

    #[inline(always)]
    fn beats_incumbent(&self, bound: RelaxationBound) -> bool {
        bound.exceeds(self.best_objective.widen())
    }
}
