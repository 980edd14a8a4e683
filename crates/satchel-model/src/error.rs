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

//! Validation errors for knapsack instances.
//!
//! All of these are detected before the search begins. None of them is
//! transient, so callers should report them instead of retrying.

use crate::index::ItemIndex;

/// Why an item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidItemReason {
    /// `weight <= 0`. Density is undefined and the fractional step of the
    /// bound would divide by zero.
    NonPositiveWeight,
    /// `value <= 0`.
    NonPositiveValue,
}

impl std::fmt::Display for InvalidItemReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveWeight => write!(f, "weight must be at least 1"),
            Self::NonPositiveValue => write!(f, "value must be at least 1"),
        }
    }
}

/// Details about a rejected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidItemError {
    /// Position of the item in the input.
    pub index: ItemIndex,
    /// Offending weight, widened.
    pub weight: i128,
    /// Offending value, widened.
    pub value: i128,
    pub reason: InvalidItemReason,
}

impl std::fmt::Display for InvalidItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "item {} (weight {}, value {}) is invalid: {}",
            self.index.get(),
            self.weight,
            self.value,
            self.reason
        )
    }
}

impl std::error::Error for InvalidItemError {}

/// The error type for building catalogs and problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An item has a non-positive weight or value.
    InvalidItem(InvalidItemError),
    /// The capacity is negative.
    InvalidCapacity { capacity: i128 },
    /// The sum of all weights or of all values does not fit the objective type.
    TotalOverflow { quantity: &'static str },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidItem(e) => write!(f, "Invalid item: {}", e),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity {}: must be non-negative", capacity)
            }
            Self::TotalOverflow { quantity } => {
                write!(f, "Total item {} overflows the objective type", quantity)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidItem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidItemError> for ModelError {
    fn from(e: InvalidItemError) -> Self {
        Self::InvalidItem(e)
    }
}
