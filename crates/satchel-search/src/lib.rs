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

//! # Satchel Search
//!
//! Solver-agnostic building blocks shared by every search strategy of the
//! workspace, and by the portfolio orchestrator in `satchel_solver`.
//!
//! ## Modules
//!
//! - `num`: the `SolverNumeric` bound collecting every integer capability
//!   a solver needs.
//! - `result`: `SolverResult`, `TerminationReason` and `SolverOutcome`.
//!   An aborted search still reports its best selection as `Feasible`;
//!   only an exhausted search reports `Optimal`.
//! - `stats`: statistics for a whole solve.
//! - `incumbent`: `SharedIncumbent`, the best selection shared between
//!   threads. Its profit only ever rises.
//! - `monitor`: `SearchMonitor` and the limit monitors (time, solution
//!   count).
//! - `portfolio`: the interface one portfolio worker implements.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod portfolio;
pub mod result;
pub mod stats;
