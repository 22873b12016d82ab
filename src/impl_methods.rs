// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;

use log::debug;

use crate::data_repr::ArrayData;
use crate::dimension::{self, last_index};
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{ArrayType, Element, HeavyDataController, TypedArray};

/// # Methods For All Arrays
impl TypedArray {
    /// Return the element type, or `None` for a pristine array.
    ///
    /// A pending array reports the type it held before release, or the
    /// type declared by its heavy data controller.
    pub fn array_type(&self) -> Option<ArrayType> {
        self.array_type
            .or_else(|| self.controller.as_ref().map(|c| c.array_type()))
    }

    /// Return the number of elements, populated or declared.
    pub fn size(&self) -> usize {
        match self.declaring_controller() {
            Some(controller) => controller.size(),
            None => self.size,
        }
    }

    /// Alias of [`.size()`](TypedArray::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Return whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Return the number of elements the storage can hold without
    /// reallocating; `0` unless the array is resident.
    pub fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, ArrayData::capacity)
    }

    /// Return the shape. An array without an explicit shape is one
    /// dimensional: `[size]`.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let a = TypedArray::from_vec(vec![1i64, 2, 3]);
    /// assert_eq!(a.dimensions(), vec![3]);
    /// ```
    pub fn dimensions(&self) -> Vec<usize> {
        if let Some(controller) = self.declaring_controller() {
            return controller.dimensions();
        }
        if self.dimensions.is_empty() {
            vec![self.size]
        } else {
            self.dimensions.clone()
        }
    }

    /// Return the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dimensions().len()
    }

    /// Return the shape as space separated text, e.g. `"4 5"`.
    pub fn dimensions_string(&self) -> String {
        dimension::dimensions_string(&self.dimensions())
    }

    /// Return the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name; content is unaffected.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Return `true` if the content is resident in memory.
    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// Return the element at `index`, converted to `T`.
    ///
    /// ***Errors*** with `NotInitialized` if the content is pending,
    /// `IndexOutOfRange` if `index >= size`, and `InvalidType` if a text
    /// element cannot be converted to a number.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let a: TypedArray = (0..8).collect();
    /// assert_eq!(a.get_value::<i32>(4).unwrap(), 4);
    /// assert_eq!(a.get_value::<f64>(7).unwrap(), 7.);
    /// assert_eq!(a.get_value::<String>(2).unwrap(), "2");
    /// ```
    pub fn get_value<T: Element>(&self, index: usize) -> Result<T, ArrayError> {
        self.check_content()?;
        match self.data {
            Some(ref data) if index < data.len() => T::from_scalar(data.scalar(index)),
            _ => Err(from_kind(ErrorKind::IndexOutOfRange)),
        }
    }

    /// Copy `count` elements starting at `start`, stepping by `stride`, out
    /// of the array as `T`.
    ///
    /// ***Errors*** with `InvalidStride` for a zero stride, `NotInitialized`
    /// if the content is pending, and `IndexOutOfRange` if the range does
    /// not fit in the array.
    pub fn get_values<T: Element>(&self, start: usize, count: usize, stride: usize) -> Result<Vec<T>, ArrayError> {
        if stride == 0 {
            return Err(from_kind(ErrorKind::InvalidStride));
        }
        self.check_content()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let last = last_index(start, count, stride);
        match (&self.data, last) {
            (Some(data), Some(last)) if last < data.len() => data.gather(start, count, stride),
            _ => Err(from_kind(ErrorKind::IndexOutOfRange)),
        }
    }

    /// Render every element in index order, separated by single spaces.
    ///
    /// Floating point values render in their shortest round-trip form, so
    /// parsing the text back yields the same values.
    ///
    /// ***Errors*** with `NotInitialized` if the content is pending.
    pub fn values_string(&self) -> Result<String, ArrayError> {
        self.check_content()?;
        let mut out = String::new();
        if let Some(ref data) = self.data {
            for_each_data!(data, v => {
                for (i, elt) in v.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&elt.to_string());
                }
            });
        }
        Ok(out)
    }

    /// Borrow the storage as a slice of `T`.
    ///
    /// Return `None` if the array is not resident or does not hold `T`.
    /// The borrow ends before the next mutating call, which may reallocate.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        self.data.as_ref().and_then(T::data_ref).map(Vec::as_slice)
    }

    /// Mutably borrow the storage as a slice of `T`; see `as_slice`.
    pub fn as_slice_mut<T: Element>(&mut self) -> Option<&mut [T]> {
        self.data.as_mut().and_then(T::data_mut).map(Vec::as_mut_slice)
    }

    /// Borrow numeric storage as raw bytes in native byte order.
    ///
    /// Return `None` for text arrays and arrays that are not resident.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_ref().and_then(ArrayData::as_bytes)
    }

    /// Exchange all state with `other`: type, shape, storage, name, heavy
    /// data controller and residency.
    ///
    /// No element is copied or moved in memory.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a: TypedArray = (0..10).collect();
    /// let mut b: TypedArray = (1..6).collect();
    /// a.swap(&mut b);
    /// assert_eq!(a.values_string().unwrap(), "1 2 3 4 5");
    /// assert_eq!(b.size(), 10);
    /// ```
    pub fn swap(&mut self, other: &mut TypedArray) {
        mem::swap(self, other);
    }

    /// Exchange the storage with `values` without copying.
    ///
    /// Succeeds if the array holds elements of type `T` or is pristine, and
    /// returns `false` otherwise, leaving both sides untouched. On success
    /// the shape flattens to the new length.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::from_vec(vec![1u16, 2, 3]);
    /// let mut v = vec![7u16, 8];
    /// assert!(a.swap_vec(&mut v));
    /// assert_eq!(v, vec![1, 2, 3]);
    /// assert_eq!(a.size(), 2);
    /// assert!(!a.swap_vec(&mut vec![0.5f64]));
    /// ```
    pub fn swap_vec<T: Element>(&mut self, values: &mut Vec<T>) -> bool {
        if self.is_pending() {
            return false;
        }
        if let Some(data) = self.data.as_mut() {
            match T::data_mut(data) {
                Some(storage) => mem::swap(storage, values),
                None => return false,
            }
        } else {
            let mut data = T::into_data(mem::take(values));
            data.apply_pending_reserve(self.pending_reserve);
            self.data = Some(data);
            self.array_type = Some(T::ARRAY_TYPE);
            self.pending_reserve = 0;
        }
        self.flatten();
        true
    }

    /// Describe the array as item properties: `Format`, `Dimensions`,
    /// `Name` (when set), `DataType` and `Precision` (when typed).
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::from_vec(vec![0.5f32; 4]);
    /// a.set_name("pressure");
    /// let props = a.item_properties();
    /// assert_eq!(props["Format"], "XML");
    /// assert_eq!(props["DataType"], "Float");
    /// assert_eq!(props["Precision"], "4");
    /// assert_eq!(props["Name"], "pressure");
    /// ```
    pub fn item_properties(&self) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        let format = self.controller.as_ref().map_or("XML", |c| c.name());
        properties.insert("Format".to_string(), format.to_string());
        properties.insert("Dimensions".to_string(), self.dimensions_string());
        if !self.name.is_empty() {
            properties.insert("Name".to_string(), self.name.clone());
        }
        if let Some(array_type) = self.array_type() {
            for (key, value) in array_type.properties() {
                properties.insert(key.to_string(), value);
            }
        }
        properties
    }

    /// The controller whose declared metadata stands in for the array's
    /// own, i.e. a controller bound to an array that never held content.
    fn declaring_controller(&self) -> Option<&Arc<dyn HeavyDataController>> {
        match self.controller {
            Some(ref controller) if self.data.is_none() && self.array_type.is_none() => Some(controller),
            _ => None,
        }
    }

    /// Content is described but not in memory.
    pub(crate) fn is_pending(&self) -> bool {
        self.data.is_none() && (self.array_type.is_some() || self.controller.is_some())
    }

    pub(crate) fn check_content(&self) -> Result<(), ArrayError> {
        if self.is_pending() {
            Err(from_kind(ErrorKind::NotInitialized))
        } else {
            Ok(())
        }
    }

    /// Drop any explicit shape and resync `size` with the storage.
    pub(crate) fn flatten(&mut self) {
        self.dimensions.clear();
        self.size = self.data.as_ref().map_or(0, ArrayData::len);
    }

    /// Run a content mutation on the storage, creating storage of
    /// `array_type` first if the array is pristine.
    ///
    /// `f` must validate before it mutates. If it fails on freshly created
    /// storage, the storage is dropped and the array stays pristine.
    pub(crate) fn with_storage<R, F>(&mut self, array_type: ArrayType, f: F) -> Result<R, ArrayError>
    where
        F: FnOnce(&mut ArrayData) -> Result<R, ArrayError>,
    {
        self.check_content()?;
        let created = self.data.is_none();
        let mut data = match self.data.take() {
            Some(data) => data,
            None => ArrayData::with_capacity(array_type, self.pending_reserve),
        };
        let result = f(&mut data);
        if result.is_ok() || !created {
            if created {
                debug!("array element type set to {} by first write", array_type);
                self.array_type = Some(array_type);
                self.pending_reserve = 0;
            }
            self.data = Some(data);
        }
        result
    }
}

impl PartialEq for TypedArray {
    /// Arrays are equal when both are resident with the same element type,
    /// shape and values. Names and controllers are not compared.
    fn eq(&self, rhs: &Self) -> bool {
        match (&self.data, &rhs.data) {
            (Some(a), Some(b)) => self.dimensions() == rhs.dimensions() && a == b,
            (None, None) => !self.is_pending() && !rhs.is_pending(),
            _ => false,
        }
    }
}
