// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `TypedArray`.

use std::iter::FromIterator;
use std::sync::Arc;

use log::debug;

use crate::data_repr::ArrayData;
use crate::dimension::size_of_shape_checked;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{ArrayType, Element, HeavyDataController, TypedArray};

/// ## Constructor methods
impl TypedArray {
    /// Create a pristine array: no element type, no content, not
    /// initialized.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let a = TypedArray::new();
    /// assert_eq!(a.size(), 0);
    /// assert_eq!(a.array_type(), None);
    /// assert!(!a.is_initialized());
    /// ```
    pub fn new() -> Self {
        TypedArray {
            data: None,
            array_type: None,
            dimensions: Vec::new(),
            size: 0,
            name: String::new(),
            controller: None,
            pending_reserve: 0,
        }
    }

    /// Create a one-dimensional array that takes ownership of `values`
    /// without copying them.
    ///
    /// ```
    /// use dynarray::{ArrayType, TypedArray};
    ///
    /// let a = TypedArray::from_vec(vec![1.5f32, 2.5]);
    /// assert_eq!(a.array_type(), Some(ArrayType::Float32));
    /// assert_eq!(a.dimensions(), vec![2]);
    /// ```
    pub fn from_vec<T: Element>(values: Vec<T>) -> Self {
        TypedArray {
            size: values.len(),
            array_type: Some(T::ARRAY_TYPE),
            data: Some(T::into_data(values)),
            ..TypedArray::new()
        }
    }

    /// Create an array with shape `dimensions` from `values`, which are in
    /// row major order.
    ///
    /// ***Errors*** with `InvalidShape` if the shape has a zero dimension or
    /// its product differs from the number of values.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let a = TypedArray::from_shape_vec(&[2, 3], (0..6u8).collect()).unwrap();
    /// assert_eq!(a.dimensions_string(), "2 3");
    /// assert!(TypedArray::from_shape_vec(&[4, 4], vec![0u8; 6]).is_err());
    /// ```
    pub fn from_shape_vec<T: Element>(dimensions: &[usize], values: Vec<T>) -> Result<Self, ArrayError> {
        let size = size_of_shape_checked(dimensions)?;
        if size != values.len() {
            return Err(from_kind(ErrorKind::InvalidShape));
        }
        let mut array = TypedArray::from_vec(values);
        array.dimensions = dimensions.to_vec();
        Ok(array)
    }

    /// Create a pending array whose content is supplied by `controller`.
    ///
    /// Type, shape and size are reported from the controller's declared
    /// values until the array is read.
    pub fn with_heavy_data_controller(controller: Arc<dyn HeavyDataController>) -> Self {
        TypedArray {
            controller: Some(controller),
            ..TypedArray::new()
        }
    }

    /// Parse whitespace separated `text` as elements of `array_type`.
    ///
    /// An empty `dimensions` takes every token as a one-dimensional array.
    ///
    /// ***Errors*** with `InvalidShape` if the token count does not match
    /// the shape, and with `InvalidType` if a token is not a value of
    /// `array_type`.
    ///
    /// ```
    /// use dynarray::{ArrayType, TypedArray};
    ///
    /// let a = TypedArray::parse(ArrayType::Int16, &[2, 2], "1 2\n3 4").unwrap();
    /// assert_eq!(a.get_value::<i16>(3).unwrap(), 4);
    /// ```
    pub fn parse(array_type: ArrayType, dimensions: &[usize], text: &str) -> Result<Self, ArrayError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if !dimensions.is_empty() && size_of_shape_checked(dimensions)? != tokens.len() {
            return Err(from_kind(ErrorKind::InvalidShape));
        }
        let data = ArrayData::parse(array_type, tokens)?;
        Ok(TypedArray {
            size: data.len(),
            array_type: Some(array_type),
            data: Some(data),
            dimensions: dimensions.to_vec(),
            ..TypedArray::new()
        })
    }

    /// Discard the current content and make the array hold `count` default
    /// valued elements of `array_type`, in one dimension.
    ///
    /// The name and heavy data controller are kept. Types that are not
    /// known at compile time come from `ArrayType::from_str` or
    /// `ArrayType::from_properties`, which reject unknown names with
    /// `InvalidType`.
    ///
    /// ***Errors*** with `InvalidShape` if `count` elements do not fit in
    /// one allocation; the array is unchanged.
    ///
    /// ```
    /// use dynarray::{ArrayType, TypedArray};
    ///
    /// let mut a = TypedArray::from_vec(vec![1u8, 2, 3]);
    /// a.initialize(ArrayType::Float64, 10).unwrap();
    /// assert_eq!(a.size(), 10);
    /// assert_eq!(a.get_value::<f64>(0).unwrap(), 0.);
    /// ```
    pub fn initialize(&mut self, array_type: ArrayType, count: usize) -> Result<(), ArrayError> {
        self.data = Some(ArrayData::with_len(array_type, count, self.pending_reserve)?);
        self.array_type = Some(array_type);
        self.dimensions.clear();
        self.size = count;
        self.pending_reserve = 0;
        debug!("initialized {} array of {} elements", array_type, count);
        Ok(())
    }

    /// Discard the current content and make the array hold default valued
    /// elements of `array_type` in the given shape.
    ///
    /// ***Errors*** with `InvalidShape` if a dimension is zero, the product
    /// overflows, or the elements do not fit in one allocation; the array
    /// is unchanged.
    ///
    /// ```
    /// use dynarray::{ArrayType, TypedArray};
    ///
    /// let mut a = TypedArray::new();
    /// a.initialize_with_shape(ArrayType::Int32, &[5, 5, 5]).unwrap();
    /// assert_eq!(a.size(), 125);
    /// assert_eq!(a.dimensions_string(), "5 5 5");
    /// ```
    pub fn initialize_with_shape(&mut self, array_type: ArrayType, dimensions: &[usize]) -> Result<(), ArrayError> {
        let size = size_of_shape_checked(dimensions)?;
        self.initialize(array_type, size)?;
        self.dimensions = dimensions.to_vec();
        Ok(())
    }
}

impl Default for TypedArray {
    fn default() -> Self {
        TypedArray::new()
    }
}

impl<T: Element> From<Vec<T>> for TypedArray {
    fn from(values: Vec<T>) -> Self {
        TypedArray::from_vec(values)
    }
}

/// Collect into a one-dimensional array.
impl<T: Element> FromIterator<T> for TypedArray {
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        TypedArray::from_vec(iterable.into_iter().collect())
    }
}
