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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for search and solver components. `SolverNumeric`
//! collects the integer capabilities the solvers rely on: `PrimInt + Signed`
//! fundamentals, lossless conversion into `i64` for the shared incumbent,
//! widening for exact density and bound comparisons, and the by-value
//! saturating / checked arithmetic from `satchel_core`.
//!
//! The shared incumbent stores profits in an `AtomicI64`, so `i128` is not
//! a solver numeric.

use num_traits::{FromPrimitive, PrimInt, Signed};
use satchel_core::num::{
    convert::Widen,
    ops::{CheckedAddVal, SaturatingAddVal},
};
use std::hash::Hash;

/// A trait alias for integer types usable as weights, values and profits.
///
/// These are the signed integer types `i8`, `i16`, `i32` and `i64`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + Widen
    + SaturatingAddVal
    + CheckedAddVal
    + Send
    + Sync
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + Widen
        + SaturatingAddVal
        + CheckedAddVal
        + Send
        + Sync
        + Hash
{
}
