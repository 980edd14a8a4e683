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

//! # Satchel Model
//!
//! **The domain model for 0/1 knapsack instances.**
//!
//! This crate is the data interchange layer between user input and the
//! search engine (`satchel_bnb`).
//!
//! ## Architecture
//!
//! * **`index`**: `ItemIndex` (position in the caller's input) and
//!   `RankIndex` (position in the density-sorted catalog).
//! * **`item`**: the immutable `(weight, value)` record.
//! * **`catalog`**: `ItemCatalog`, items sorted once by descending value
//!   density. Every level index and every bound computed by the search
//!   refers to this order.
//! * **`problem`**: a validated catalog plus a capacity.
//! * **`selection`**: the reported answer, a subset of items in input terms.
//! * **`loading`**: whitespace-delimited text loaders for item lists and
//!   capacities.
//! * **`error`**: validation errors raised before any search starts.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: non-positive weights or values and negative capacities
//!    are rejected at construction time. Once a `Problem` exists the search
//!    over it cannot fail.
//! 2. **Structure of Arrays**: the catalog keeps weights and values in
//!    separate vectors indexed by rank, which is what the bound's greedy
//!    fill walks over.

pub mod catalog;
pub mod error;
pub mod index;
pub mod item;
pub mod loading;
pub mod problem;
pub mod selection;
