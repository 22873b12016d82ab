// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::trace;

use crate::data_repr::{try_resize, ArrayData};
use crate::dimension::size_of_shape_checked;
use crate::element::convert;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{Element, TypedArray};

/// # Size and capacity
impl TypedArray {
    /// Grow or truncate the array to `new_size` elements.
    ///
    /// New elements are `fill`, converted to the element type; a pristine
    /// array takes the type `T`. The shape flattens to `[new_size]`, even
    /// when the size does not change.
    ///
    /// ***Errors*** with `NotInitialized` if the content is pending,
    /// `InvalidShape` if `new_size` elements do not fit in one allocation
    /// (more than `isize::MAX` bytes), and `InvalidType` if `fill` does not
    /// convert. On error the array is unchanged.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::from_shape_vec(&[2, 2], vec![1i16, 2, 3, 4]).unwrap();
    /// a.resize(6, 9.9f64).unwrap();
    /// assert_eq!(a.values_string().unwrap(), "1 2 3 4 9 9");
    /// assert_eq!(a.dimensions(), vec![6]);
    /// a.resize(1, 0u8).unwrap();
    /// assert_eq!(a.values_string().unwrap(), "1");
    /// ```
    pub fn resize<T: Element>(&mut self, new_size: usize, fill: T) -> Result<(), ArrayError> {
        self.check_content()?;
        self.fill_to(new_size, &fill)?;
        self.flatten();
        Ok(())
    }

    /// Grow or truncate the array to the element count of `dimensions` and
    /// take that shape; fill semantics as in `resize`.
    ///
    /// ***Errors*** with `InvalidShape` if a dimension is zero or the
    /// product overflows, plus the errors of `resize`.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a: TypedArray = (0..4u32).collect();
    /// a.resize_with_shape(&[2, 3], 7u32).unwrap();
    /// assert_eq!(a.dimensions_string(), "2 3");
    /// assert_eq!(a.get_value::<u32>(5).unwrap(), 7);
    /// ```
    pub fn resize_with_shape<T: Element>(&mut self, dimensions: &[usize], fill: T) -> Result<(), ArrayError> {
        self.check_content()?;
        let new_size = size_of_shape_checked(dimensions)?;
        self.fill_to(new_size, &fill)?;
        self.size = new_size;
        self.dimensions = dimensions.to_vec();
        Ok(())
    }

    /// Make room for at least `capacity` elements in total without changing
    /// the content. Never shrinks.
    ///
    /// Without resident storage the request is remembered and applied when
    /// storage is next created by a write, `initialize` or `read`. A
    /// remembered request that the storage's element type cannot honor is
    /// dropped.
    ///
    /// ***Errors*** with `InvalidShape` if `capacity` elements of the
    /// array's type do not fit in one allocation, or the allocator refuses
    /// them. On error the capacity is unchanged.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a = TypedArray::from_vec(vec![1u8]);
    /// a.reserve(50).unwrap();
    /// assert!(a.capacity() >= 50);
    /// assert_eq!(a.size(), 1);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        match self.data {
            Some(ref mut data) => {
                let before = data.capacity();
                data.reserve_total(capacity)?;
                if data.capacity() != before {
                    trace!("array capacity grew from {} to {}", before, data.capacity());
                }
            }
            None => {
                let fits = match self.array_type() {
                    Some(ty) => ArrayData::fits(ty, capacity),
                    None => capacity <= isize::MAX as usize,
                };
                if !fits {
                    return Err(from_kind(ErrorKind::InvalidShape));
                }
                self.pending_reserve = Ord::max(self.pending_reserve, capacity);
            }
        }
        Ok(())
    }

    /// Remove every element and drop any explicit shape.
    ///
    /// A resident array keeps its element type and capacity and stays
    /// resident. A pending array forgets its retained size and shape, but
    /// its content can still be read.
    pub fn clear(&mut self) {
        if let Some(ref mut data) = self.data {
            data.clear();
        }
        self.dimensions.clear();
        self.size = 0;
    }

    fn fill_to<T: Element>(&mut self, len: usize, fill: &T) -> Result<(), ArrayError> {
        let array_type = self.data.as_ref().map_or(T::ARRAY_TYPE, ArrayData::array_type);
        for_each_type!(array_type, E => {
            let fill: E = convert(fill)?;
            self.with_storage(E::ARRAY_TYPE, |data| {
                let v = E::data_mut(data).ok_or_else(|| from_kind(ErrorKind::InvalidType))?;
                try_resize(v, len, fill, ErrorKind::InvalidShape)
            })
        })
    }
}
