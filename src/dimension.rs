// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape bookkeeping helpers.

use crate::error::{from_kind, ArrayError, ErrorKind};

/// Returns the number of elements in a shape, checking that every
/// dimension is positive and that the product fits in `isize::MAX`.
///
/// ***Errors*** with `InvalidShape` for an empty shape, a zero dimension,
/// or an overflowing product.
pub fn size_of_shape_checked(dims: &[usize]) -> Result<usize, ArrayError> {
    if dims.is_empty() || dims.iter().any(|&d| d == 0) {
        return Err(from_kind(ErrorKind::InvalidShape));
    }
    let size = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::InvalidShape))?;
    if size > isize::MAX as usize {
        Err(from_kind(ErrorKind::InvalidShape))
    } else {
        Ok(size)
    }
}

/// Product of the dimensions, unchecked. `[]` counts as `1`.
#[inline]
pub fn size_of_shape(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Space separated rendering of a shape, e.g. `"5 5 5"`.
pub fn dimensions_string(dims: &[usize]) -> String {
    let mut s = String::new();
    for (i, d) in dims.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&d.to_string());
    }
    s
}

/// Index of the last element touched by a strided range, or `None` if it
/// does not fit in `usize`. `count` must be non-zero.
#[inline]
pub(crate) fn last_index(start: usize, count: usize, stride: usize) -> Option<usize> {
    debug_assert!(count > 0);
    (count - 1).checked_mul(stride)?.checked_add(start)
}
