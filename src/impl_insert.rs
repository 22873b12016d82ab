// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strided insertion and element removal.

use log::trace;

use crate::data_repr::{try_resize, ArrayData};
use crate::dimension::last_index;
use crate::element::convert;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{Element, TypedArray};

/// A strided write into a vector, already checked against overflow.
#[derive(Copy, Clone, Debug)]
struct Placement {
    start: usize,
    stride: usize,
    last: usize,
}

impl Placement {
    fn new(start: usize, count: usize, stride: usize) -> Result<Self, ArrayError> {
        match last_index(start, count, stride) {
            Some(last) if last < isize::MAX as usize => Ok(Placement { start, stride, last }),
            _ => Err(from_kind(ErrorKind::IndexOutOfRange)),
        }
    }

    #[inline]
    fn index(&self, i: usize) -> usize {
        self.start + i * self.stride
    }
}

/// Grow `v` with default values so that index `last` exists. Return whether
/// it grew.
///
/// ***Errors*** with `IndexOutOfRange` if the grown storage would not fit in
/// one allocation; `v` is then unchanged.
fn grow_to_hold<E: Element>(v: &mut Vec<E>, last: usize) -> Result<bool, ArrayError> {
    if last < v.len() {
        return Ok(false);
    }
    trace!("growing array storage from {} to {} elements", v.len(), last + 1);
    try_resize(v, last + 1, E::default(), ErrorKind::IndexOutOfRange)?;
    Ok(true)
}

/// Write `values` at the placement's positions, growing `v` if the last
/// position lies past its end. Return whether it grew.
fn scatter<E: Element>(v: &mut Vec<E>, at: Placement, values: Vec<E>) -> Result<bool, ArrayError> {
    let grew = grow_to_hold(v, at.last)?;
    for (i, value) in values.into_iter().enumerate() {
        v[at.index(i)] = value;
    }
    Ok(grew)
}

/// Strided copy inside one vector.
///
/// When the index ranges touched by the read and the write intersect,
/// every source element is read into a buffer before anything is written.
fn copy_within<E: Element>(v: &mut Vec<E>, from: Placement, to: Placement, count: usize)
    -> Result<bool, ArrayError>
{
    if from.start <= to.last && to.start <= from.last {
        trace!("buffering {} elements for overlapping self-insert", count);
        let buffer: Vec<E> = (0..count).map(|i| v[from.index(i)].clone()).collect();
        scatter(v, to, buffer)
    } else {
        let grew = grow_to_hold(v, to.last)?;
        for i in 0..count {
            v[to.index(i)] = v[from.index(i)].clone();
        }
        Ok(grew)
    }
}

/// # Insertion
impl TypedArray {
    /// Copy `count` values from `source` into this array.
    ///
    /// Values are read from `source` at `src_start`, `src_start +
    /// src_stride`, ... and written at `start`, `start + dst_stride`, ...,
    /// converted to this array's element type. A pristine array takes the
    /// element type of `source`.
    ///
    /// If the last written index is past the end, the array grows to hold
    /// it, with default values in the gaps, and its shape flattens to one
    /// dimension. The array never shrinks here.
    ///
    /// ***Errors*** with `InvalidStride` if a stride is zero,
    /// `NotInitialized` if either array is pending, `IndexOutOfRange` if
    /// the source range is not inside `source` or the grown array would not
    /// fit in one allocation, and `InvalidType` if a text value does not
    /// convert. On error the array is unchanged.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let source = TypedArray::from_vec(vec![1.5f64, 2.5, 3.5]);
    /// let mut a = TypedArray::from_vec(vec![0i32; 2]);
    /// a.insert(1, &source, 0, 3, 1, 2).unwrap();
    /// assert_eq!(a.values_string().unwrap(), "0 1 0 2 0 3");
    /// ```
    pub fn insert(
        &mut self,
        start: usize,
        source: &TypedArray,
        src_start: usize,
        count: usize,
        src_stride: usize,
        dst_stride: usize,
    ) -> Result<(), ArrayError> {
        if src_stride == 0 || dst_stride == 0 {
            return Err(from_kind(ErrorKind::InvalidStride));
        }
        self.check_content()?;
        source.check_content()?;
        if count == 0 {
            return Ok(());
        }
        let src_data = match source.data {
            Some(ref data) => data,
            None => return Err(from_kind(ErrorKind::IndexOutOfRange)),
        };
        let from = Placement::new(src_start, count, src_stride)?;
        if from.last >= src_data.len() {
            return Err(from_kind(ErrorKind::IndexOutOfRange));
        }
        let to = Placement::new(start, count, dst_stride)?;
        let array_type = self
            .data
            .as_ref()
            .map_or_else(|| src_data.array_type(), ArrayData::array_type);
        for_each_type!(array_type, E => {
            let values = src_data.gather::<E>(src_start, count, src_stride)?;
            self.write_values(to, values)
        })
    }

    /// Copy `count` values from this array into itself; see `insert`.
    ///
    /// The source and destination ranges may overlap: every source value is
    /// read before it can be overwritten.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a: TypedArray = (0..10).collect();
    /// a.insert_within(0, 0, 5, 1, 2).unwrap();
    /// assert_eq!(a.values_string().unwrap(), "0 1 1 3 2 5 3 7 4 9");
    /// ```
    pub fn insert_within(
        &mut self,
        start: usize,
        src_start: usize,
        count: usize,
        src_stride: usize,
        dst_stride: usize,
    ) -> Result<(), ArrayError> {
        if src_stride == 0 || dst_stride == 0 {
            return Err(from_kind(ErrorKind::InvalidStride));
        }
        self.check_content()?;
        if count == 0 {
            return Ok(());
        }
        let from = Placement::new(src_start, count, src_stride)?;
        let to = Placement::new(start, count, dst_stride)?;
        let data = match self.data {
            Some(ref mut data) if from.last < data.len() => data,
            _ => return Err(from_kind(ErrorKind::IndexOutOfRange)),
        };
        let grew = for_each_data!(data, v => copy_within(v, from, to, count))?;
        if grew {
            self.flatten();
        }
        Ok(())
    }

    /// Write `values` contiguously starting at `start`, growing the array
    /// if needed.
    ///
    /// Values are converted to the element type; a pristine array takes
    /// the type `T`.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::new();
    /// a.insert_values(0, &[1u8, 2, 3]).unwrap();
    /// a.insert_values(2, &[9.7f64, 8.2]).unwrap();
    /// assert_eq!(a.values_string().unwrap(), "1 2 9 8");
    /// ```
    pub fn insert_values<T: Element>(&mut self, start: usize, values: &[T]) -> Result<(), ArrayError> {
        self.check_content()?;
        if values.is_empty() {
            return Ok(());
        }
        let to = Placement::new(start, values.len(), 1)?;
        let array_type = self.data.as_ref().map_or(T::ARRAY_TYPE, ArrayData::array_type);
        for_each_type!(array_type, E => {
            let converted = values.iter().map(convert::<T, E>).collect::<Result<Vec<E>, _>>()?;
            self.write_values(to, converted)
        })
    }

    /// Append one value at index `size`.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::new();
    /// for i in 0..4 {
    ///     a.push_back(i as f32 * 0.5).unwrap();
    /// }
    /// assert_eq!(a.values_string().unwrap(), "0 0.5 1 1.5");
    /// ```
    pub fn push_back<T: Element>(&mut self, value: T) -> Result<(), ArrayError> {
        let end = self.size();
        self.insert_values(end, &[value])
    }

    /// Remove the element at `index`, shifting the following elements down.
    ///
    /// The shape flattens to one dimension.
    ///
    /// ***Errors*** with `IndexOutOfRange` if `index >= size` and
    /// `NotInitialized` if the content is pending.
    pub fn erase(&mut self, index: usize) -> Result<(), ArrayError> {
        self.check_content()?;
        match self.data {
            Some(ref mut data) if index < data.len() => data.remove(index),
            _ => return Err(from_kind(ErrorKind::IndexOutOfRange)),
        }
        self.flatten();
        Ok(())
    }

    /// Scatter already converted values; storage is created for a pristine
    /// array.
    fn write_values<E: Element>(&mut self, to: Placement, values: Vec<E>) -> Result<(), ArrayError> {
        let grew = self.with_storage(E::ARRAY_TYPE, |data| {
            let v = E::data_mut(data).ok_or_else(|| from_kind(ErrorKind::InvalidType))?;
            scatter(v, to, values)
        })?;
        if grew {
            self.flatten();
        }
        Ok(())
    }
}
