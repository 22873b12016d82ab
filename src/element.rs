// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element types and the conversion table between them.
//!
//! Every conversion goes through `Scalar`: the source element widens to a
//! `Scalar`, and the destination type is built back from it. Numeric to
//! numeric conversion uses `as` semantics via `num_traits::AsPrimitive`.

use std::fmt;
use std::str::FromStr;

use num_traits::AsPrimitive;

use crate::array_type::ArrayType;
use crate::data_repr::ArrayData;
use crate::error::{from_kind, ArrayError, ErrorKind};

/// One element, widened to the largest representation of its kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar<'a> {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Single precision float; kept apart so text renders without
    /// double precision noise.
    Float32(f32),
    /// Double precision float.
    Float64(f64),
    /// Text.
    Text(&'a str),
}

impl Scalar<'_> {
    /// The value as `f64`, or `None` for text that is not a number.
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(v as f64),
            Scalar::UInt(v) => Some(v as f64),
            Scalar::Float32(v) => Some(v as f64),
            Scalar::Float64(v) => Some(v),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => fmt::Display::fmt(&v, f),
            Scalar::UInt(v) => fmt::Display::fmt(&v, f),
            Scalar::Float32(v) => fmt::Display::fmt(&v, f),
            Scalar::Float64(v) => fmt::Display::fmt(&v, f),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// A type that can be stored in a `TypedArray`.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`,
/// `f32`, `f64` and `String`. This trait is sealed.
pub trait Element: Clone + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The runtime tag for this element type.
    const ARRAY_TYPE: ArrayType;

    /// Widen to a `Scalar`.
    fn to_scalar(&self) -> Scalar<'_>;

    /// Convert from a `Scalar`.
    ///
    /// ***Errors*** with `InvalidType` when text cannot be parsed as a
    /// number of this type.
    fn from_scalar(value: Scalar<'_>) -> Result<Self, ArrayError>;

    #[doc(hidden)]
    fn into_data(values: Vec<Self>) -> ArrayData;

    #[doc(hidden)]
    fn data_ref(data: &ArrayData) -> Option<&Vec<Self>>;

    #[doc(hidden)]
    fn data_mut(data: &mut ArrayData) -> Option<&mut Vec<Self>>;

    private_decl! {}
}

/// Convert any element into another element type.
#[inline]
pub fn convert<T: Element, E: Element>(value: &T) -> Result<E, ArrayError> {
    E::from_scalar(value.to_scalar())
}

fn parse_number<E>(text: &str) -> Result<E, ArrayError>
where
    E: FromStr + Copy + 'static,
    f64: AsPrimitive<E>,
{
    let text = text.trim();
    text.parse::<E>()
        .or_else(|_| text.parse::<f64>().map(<f64 as AsPrimitive<E>>::as_))
        .map_err(|_| from_kind(ErrorKind::InvalidType))
}

macro_rules! impl_numeric_element {
    ($ty:ty, $variant:ident, $scalar:ident, $wide:ty) => {
        impl Element for $ty {
            const ARRAY_TYPE: ArrayType = ArrayType::$variant;

            #[inline]
            fn to_scalar(&self) -> Scalar<'_> {
                Scalar::$scalar(<$ty as AsPrimitive<$wide>>::as_(*self))
            }

            #[inline]
            fn from_scalar(value: Scalar<'_>) -> Result<Self, ArrayError> {
                Ok(match value {
                    Scalar::Int(v) => <i64 as AsPrimitive<$ty>>::as_(v),
                    Scalar::UInt(v) => <u64 as AsPrimitive<$ty>>::as_(v),
                    Scalar::Float32(v) => <f32 as AsPrimitive<$ty>>::as_(v),
                    Scalar::Float64(v) => <f64 as AsPrimitive<$ty>>::as_(v),
                    Scalar::Text(s) => return parse_number(s),
                })
            }

            fn into_data(values: Vec<Self>) -> ArrayData {
                ArrayData::$variant(values)
            }

            fn data_ref(data: &ArrayData) -> Option<&Vec<Self>> {
                match data {
                    ArrayData::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn data_mut(data: &mut ArrayData) -> Option<&mut Vec<Self>> {
                match data {
                    ArrayData::$variant(v) => Some(v),
                    _ => None,
                }
            }

            private_impl! {}
        }
    };
}

impl_numeric_element!(i8, Int8, Int, i64);
impl_numeric_element!(i16, Int16, Int, i64);
impl_numeric_element!(i32, Int32, Int, i64);
impl_numeric_element!(i64, Int64, Int, i64);
impl_numeric_element!(u8, UInt8, UInt, u64);
impl_numeric_element!(u16, UInt16, UInt, u64);
impl_numeric_element!(u32, UInt32, UInt, u64);
impl_numeric_element!(u64, UInt64, UInt, u64);
impl_numeric_element!(f32, Float32, Float32, f32);
impl_numeric_element!(f64, Float64, Float64, f64);

impl Element for String {
    const ARRAY_TYPE: ArrayType = ArrayType::String;

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Text(self)
    }

    fn from_scalar(value: Scalar<'_>) -> Result<Self, ArrayError> {
        Ok(match value {
            Scalar::Text(s) => s.to_owned(),
            other => other.to_string(),
        })
    }

    fn into_data(values: Vec<Self>) -> ArrayData {
        ArrayData::String(values)
    }

    fn data_ref(data: &ArrayData) -> Option<&Vec<Self>> {
        match data {
            ArrayData::String(v) => Some(v),
            _ => None,
        }
    }

    fn data_mut(data: &mut ArrayData) -> Option<&mut Vec<Self>> {
        match data {
            ArrayData::String(v) => Some(v),
            _ => None,
        }
    }

    private_impl! {}
}
