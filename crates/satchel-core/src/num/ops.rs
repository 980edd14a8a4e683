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

//! By-value saturating and checked arithmetic.
//!
//! The inherent `saturating_add` / `checked_add` methods of the primitive
//! integers are not reachable through a generic bound. These traits expose
//! them by value so generic solver code can write
//! `profit.saturating_add_val(value)` for any objective type.
//!
//! ```rust
//! use satchel_core::num::ops::{CheckedAddVal, SaturatingAddVal};
//!
//! assert_eq!(250u8.saturating_add_val(10), 255);
//! assert_eq!(i64::MAX.checked_add_val(1), None);
//! assert_eq!(40i64.checked_add_val(2), Some(42));
//! ```

use core::ops::Add;

/// Saturating addition by value.
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Checked addition by value; `None` on overflow.
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $ret:ty, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> $ret {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

impl_binary_val!(SaturatingAddVal, saturating_add_val, saturating_add, Self, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_binary_val!(CheckedAddVal, checked_add_val, checked_add, Option<Self>, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate<T>(values: &[T], start: T) -> T
    where
        T: SaturatingAddVal + Copy,
    {
        values.iter().fold(start, |acc, &v| acc.saturating_add_val(v))
    }

    #[test]
    fn test_saturating_clamps_at_bounds() {
        assert_eq!(accumulate(&[i8::MAX, 1, 1], 0i8), i8::MAX);
        assert_eq!(accumulate(&[i16::MIN, -1], 0i16), i16::MIN);
        assert_eq!(accumulate(&[250u8, 10], 0u8), 255);
    }

    #[test]
    fn test_checked_reports_overflow() {
        assert_eq!(i32::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_add_val(-1), None);
        assert_eq!(40i64.checked_add_val(2), Some(42));
    }
}
