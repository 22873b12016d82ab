// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_methods {
    use crate::TypedArray;

    impl TypedArray {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq(&self, other: &TypedArray, epsilon: f64) -> bool {
            <Self as ::approx::AbsDiffEq>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq(&self, other: &TypedArray, epsilon: f64, max_relative: f64) -> bool {
            <Self as ::approx::RelativeEq>::relative_eq(self, other, epsilon, max_relative)
        }

        /// Compare both arrays elementwise as `f64`.
        ///
        /// Both must be resident and numeric, with the same shape; element
        /// types may differ.
        pub(super) fn all_f64<F>(&self, other: &TypedArray, mut f: F) -> bool
        where
            F: FnMut(f64, f64) -> bool,
        {
            let (a, b) = match (&self.data, &other.data) {
                (Some(a), Some(b)) => (a, b),
                _ => return false,
            };
            if !a.array_type().is_numeric() || !b.array_type().is_numeric() {
                return false;
            }
            if self.dimensions() != other.dimensions() {
                return false;
            }
            (0..a.len()).all(|i| match (a.scalar(i).to_f64(), b.scalar(i).to_f64()) {
                (Some(x), Some(y)) => f(x, y),
                _ => false,
            })
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits {
    use crate::TypedArray;
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    /// **Requires crate feature `"approx"`.**
    impl AbsDiffEq for TypedArray {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &TypedArray, epsilon: f64) -> bool {
            self.all_f64(other, |a, b| a.abs_diff_eq(&b, epsilon))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl RelativeEq for TypedArray {
        fn default_max_relative() -> f64 {
            f64::default_max_relative()
        }

        fn relative_eq(&self, other: &TypedArray, epsilon: f64, max_relative: f64) -> bool {
            self.all_f64(other, |a, b| a.relative_eq(&b, epsilon, max_relative))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl UlpsEq for TypedArray {
        fn default_max_ulps() -> u32 {
            f64::default_max_ulps()
        }

        fn ulps_eq(&self, other: &TypedArray, epsilon: f64, max_ulps: u32) -> bool {
            self.all_f64(other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
        }
    }

}
