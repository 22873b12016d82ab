// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::mem;
use std::slice;

use log::debug;

use crate::array_type::ArrayType;
use crate::element::{convert, Element, Scalar};
use crate::error::{from_kind, ArrayError, ErrorKind};

/// Storage of a `TypedArray`: one owned, contiguous vector of the active
/// element type.
///
/// *Not reachable from outside the crate; use `TypedArray`.*
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayData {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    String(Vec<String>),
}

fn element_type_of<E: Element>(_: &[E]) -> ArrayType {
    E::ARRAY_TYPE
}

/// Read `count` elements starting at `start`, stepping by `stride`, and
/// convert each into `E`. Bounds are the caller's responsibility.
fn convert_strided<T, E>(values: &[T], start: usize, count: usize, stride: usize)
    -> Result<Vec<E>, ArrayError>
where
    T: Element,
    E: Element,
{
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(convert(&values[start + i * stride])?);
    }
    Ok(out)
}

/// Whether `len` elements of `E` stay within the `isize::MAX` byte limit of
/// an allocation.
pub(crate) fn fits_allocation<E>(len: usize) -> bool {
    len.checked_mul(mem::size_of::<E>())
        .map_or(false, |bytes| bytes <= isize::MAX as usize)
}

/// Grow or truncate `v` to `len` elements, padding with `value`.
///
/// ***Errors*** with `kind` if the allocator refuses the growth; `v` is then
/// unchanged.
pub(crate) fn try_resize<E: Clone>(v: &mut Vec<E>, len: usize, value: E, kind: ErrorKind)
    -> Result<(), ArrayError>
{
    if len > v.len() {
        v.try_reserve(len - v.len()).map_err(|_| from_kind(kind))?;
    }
    v.resize(len, value);
    Ok(())
}

/// Reserve room for `total` elements when the allocator allows it. Used for
/// reservations made before the element type was settled.
fn reserve_hint<E>(v: &mut Vec<E>, total: usize) {
    if total > v.len() && v.try_reserve(total - v.len()).is_err() {
        debug!("dropped a pending reservation of {} elements", total);
    }
}

fn bytes_of<E: Copy>(values: &[E]) -> &[u8] {
    // Only instantiated for primitive numbers: no padding, and every byte is
    // initialized.
    unsafe { slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values)) }
}

impl ArrayData {
    /// Empty storage of `ty`, with room for `capacity` elements if the
    /// allocator allows it.
    pub(crate) fn with_capacity(ty: ArrayType, capacity: usize) -> ArrayData {
        for_each_type!(ty, E => {
            let mut v = Vec::<E>::new();
            reserve_hint(&mut v, capacity);
            E::into_data(v)
        })
    }

    /// `len` default valued elements of `ty`, with room for at least
    /// `capacity` elements if the allocator allows it.
    ///
    /// ***Errors*** with `InvalidShape` if `len` elements do not fit in one
    /// allocation.
    pub(crate) fn with_len(ty: ArrayType, len: usize, capacity: usize) -> Result<ArrayData, ArrayError> {
        for_each_type!(ty, E => {
            let mut v = Vec::<E>::new();
            try_resize(&mut v, len, E::default(), ErrorKind::InvalidShape)?;
            reserve_hint(&mut v, capacity);
            Ok(E::into_data(v))
        })
    }

    /// Parse whitespace separated tokens as elements of `ty`.
    pub(crate) fn parse<'a, I>(ty: ArrayType, tokens: I) -> Result<ArrayData, ArrayError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for_each_type!(ty, E => {
            let values = tokens
                .into_iter()
                .map(|token| E::from_scalar(Scalar::Text(token)))
                .collect::<Result<Vec<E>, _>>()?;
            Ok(E::into_data(values))
        })
    }

    pub(crate) fn array_type(&self) -> ArrayType {
        for_each_data!(self, v => element_type_of(v))
    }

    pub(crate) fn len(&self) -> usize {
        for_each_data!(self, v => v.len())
    }

    pub(crate) fn capacity(&self) -> usize {
        for_each_data!(self, v => v.capacity())
    }

    /// Make room for at least `total` elements. Never shrinks.
    ///
    /// ***Errors*** with `InvalidShape` if the allocator refuses; the
    /// capacity is then unchanged.
    pub(crate) fn reserve_total(&mut self, total: usize) -> Result<(), ArrayError> {
        for_each_data!(self, v => {
            if total > v.len() {
                // try_reserve grows geometrically, like reserve
                v.try_reserve(total - v.len()).map_err(|_| from_kind(ErrorKind::InvalidShape))?;
            }
            Ok(())
        })
    }

    /// `reserve_total` for a reservation remembered before storage existed.
    pub(crate) fn apply_pending_reserve(&mut self, total: usize) {
        for_each_data!(self, v => reserve_hint(v, total))
    }

    /// Whether `len` elements of the active type fit in one allocation.
    pub(crate) fn fits(ty: ArrayType, len: usize) -> bool {
        for_each_type!(ty, E => fits_allocation::<E>(len))
    }

    pub(crate) fn clear(&mut self) {
        for_each_data!(self, v => v.clear())
    }

    pub(crate) fn remove(&mut self, index: usize) {
        for_each_data!(self, v => {
            v.remove(index);
        })
    }

    pub(crate) fn scalar(&self, index: usize) -> Scalar<'_> {
        for_each_data!(self, v => v[index].to_scalar())
    }

    /// Strided read converted into `E`; see `convert_strided`.
    pub(crate) fn gather<E: Element>(&self, start: usize, count: usize, stride: usize)
        -> Result<Vec<E>, ArrayError>
    {
        for_each_data!(self, v => convert_strided(v, start, count, stride))
    }

    pub(crate) fn fmt_element(&self, index: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_data!(self, v => fmt::Display::fmt(&v[index], f))
    }

    /// Raw bytes of numeric storage, in native byte order.
    pub(crate) fn as_bytes(&self) -> Option<&[u8]> {
        Some(match self {
            ArrayData::Int8(v) => bytes_of(v),
            ArrayData::Int16(v) => bytes_of(v),
            ArrayData::Int32(v) => bytes_of(v),
            ArrayData::Int64(v) => bytes_of(v),
            ArrayData::UInt8(v) => bytes_of(v),
            ArrayData::UInt16(v) => bytes_of(v),
            ArrayData::UInt32(v) => bytes_of(v),
            ArrayData::UInt64(v) => bytes_of(v),
            ArrayData::Float32(v) => bytes_of(v),
            ArrayData::Float64(v) => bytes_of(v),
            ArrayData::String(_) => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_len_defaults() {
        let data = ArrayData::with_len(ArrayType::Float32, 3, 10).unwrap();
        assert_eq!(data, ArrayData::Float32(vec![0.; 3]));
        assert!(data.capacity() >= 10);
        assert_eq!(data.array_type(), ArrayType::Float32);
    }

    #[test]
    fn gather_converts() {
        let data = ArrayData::Int32((0..10).collect());
        let picked: Vec<f64> = data.gather(1, 3, 3).unwrap();
        assert_eq!(picked, vec![1., 4., 7.]);
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut data = ArrayData::with_capacity(ArrayType::UInt8, 64);
        data.reserve_total(8).unwrap();
        assert!(data.capacity() >= 64);
        data.reserve_total(100).unwrap();
        assert!(data.capacity() >= 100);
    }

    #[test]
    fn oversized_requests_fail() {
        assert!(fits_allocation::<u8>(isize::MAX as usize));
        assert!(!fits_allocation::<u16>(isize::MAX as usize));
        assert!(!ArrayData::fits(ArrayType::Int64, isize::MAX as usize / 4));

        let mut data = ArrayData::Int64(vec![1]);
        let err = data.reserve_total(usize::MAX / 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        assert_eq!(data, ArrayData::Int64(vec![1]));

        let mut v = vec![1u32];
        let err = try_resize(&mut v, usize::MAX / 2, 0, ErrorKind::IndexOutOfRange).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(v, vec![1]);

        let data = ArrayData::with_capacity(ArrayType::Float64, usize::MAX / 2);
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn bytes_are_native_order() {
        let data = ArrayData::UInt16(vec![1, 2]);
        let expected: Vec<u8> = [1u16, 2].iter().flat_map(|v| v.to_ne_bytes()).collect();
        assert_eq!(data.as_bytes().unwrap(), &expected[..]);
        assert!(ArrayData::String(vec![]).as_bytes().is_none());
    }
}
