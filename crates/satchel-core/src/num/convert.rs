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

//! Widening conversions for objective integers.
//!
//! Density comparisons and relaxation bounds are computed in `i128`. The
//! product of two 64-bit values always fits, so both are exact for every
//! 64-bit input.

/// Integer types that widen losslessly into `i128`.
pub trait Widen: Copy {
    fn widen(self) -> i128;
}

macro_rules! impl_widen {
    ($($t:ty),+) => {
        $(
            impl Widen for $t {
                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

impl_widen!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::Widen;

    #[test]
    fn test_widen_cross_products_do_not_overflow() {
        let a = i64::MAX.widen() * i64::MAX.widen();
        assert!(a > 0);
        assert_eq!((-3i32).widen(), -3);
        assert_eq!(7u16.widen(), 7);
    }
}
