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

//! Satchel-BnB: branch-and-bound for 0/1 knapsack
//!
//! The engine keeps a frontier of live nodes, pops one at a time and
//! expands it into an include child and an exclude child for the next item
//! of the density-sorted catalog. Each child receives an upper bound from a
//! `BoundEstimator` when it is created, and is admitted to the frontier only
//! if that bound beats the incumbent.
//!
//! Core flow
//! - Provide a `satchel_model::problem::Problem<T>`.
//! - Choose a frontier discipline (`frontier::FrontierKind`).
//! - Optionally choose a bound estimator (default: `bound::FractionalBound`),
//!   a shared incumbent, and monitors.
//! - Run `bnb::BnbSolver` directly, or integrate via `portfolio`.
//!
//! Assumptions and guarantees
//! - Bounds must be admissible: never below the profit of any feasible
//!   completion of the node. Pruning relies on this for correctness.
//! - The incumbent starts at `0` (the empty selection) and never decreases.
//! - The optimum does not depend on the frontier discipline.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `bound`: bound estimator interface and the fractional relaxation.
//! - `node`: immutable search node values.
//! - `frontier`: FIFO, LIFO and best-first frontiers.
//! - `monitor`: tree-search monitors (log, pair and option combinators, limits, wrappers).
//! - `portfolio`: adapter to the `satchel_search` portfolio API.
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: counters and timing.

pub mod bnb;
pub mod bound;
pub mod frontier;
mod incumbent;
pub mod monitor;
pub mod node;
pub mod portfolio;
pub mod result;
pub mod stats;
