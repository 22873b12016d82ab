// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::data_repr::ArrayData;
use crate::dimension::size_of_shape;
use crate::TypedArray;

/// Write the elements at `offset..` covered by `shape[depth..]` as nested
/// brackets, one line per outermost row.
fn format_axis(
    data: &ArrayData,
    shape: &[usize],
    depth: usize,
    offset: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("[")?;
    if depth + 1 == shape.len() {
        for i in 0..shape[depth] {
            if i > 0 {
                f.write_str(", ")?;
            }
            data.fmt_element(offset + i, f)?;
        }
    } else {
        let stride = size_of_shape(&shape[depth + 1..]);
        for i in 0..shape[depth] {
            if i > 0 {
                f.write_str(",\n")?;
                for _ in 0..=depth {
                    f.write_str(" ")?;
                }
            }
            format_axis(data, shape, depth + 1, offset + i * stride, f)?;
        }
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, one bracket level per dimension.
/// An array whose content is not resident shows its type and shape instead.
///
/// ```
/// use dynarray::TypedArray;
///
/// let a = TypedArray::from_shape_vec(&[2, 3], (0..6).collect()).unwrap();
/// assert_eq!(a.to_string(), "[[0, 1, 2],\n [3, 4, 5]]");
/// ```
impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(ref data) if data.len() > 0 => format_axis(data, &self.dimensions(), 0, 0, f),
            Some(_) => f.write_str("[]"),
            None => match self.array_type() {
                Some(array_type) => write!(f, "<{} array {:?}, not read>", array_type, self.dimensions()),
                None => f.write_str("[]"),
            },
        }
    }
}

/// Format the array using `Debug`, adding type, shape, name and residency.
impl fmt::Debug for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)?;
        match self.array_type() {
            Some(array_type) => write!(f, " type={}", array_type)?,
            None => f.write_str(" type=none")?,
        }
        write!(f, ", shape={:?}, resident={}", self.dimensions(), self.is_initialized())?;
        if !self.name().is_empty() {
            write!(f, ", name={:?}", self.name())?;
        }
        if let Some(controller) = self.heavy_data_controller() {
            write!(f, ", controller={}", controller.name())?;
        }
        Ok(())
    }
}
