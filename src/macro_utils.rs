// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Run `$body` with `$v` bound to the typed vector inside an `ArrayData`,
/// once per storage variant.
///
/// Works on `ArrayData`, `&ArrayData` and `&mut ArrayData` alike; the
/// binding mode follows the matched expression.
macro_rules! for_each_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            $crate::data_repr::ArrayData::Int8($v) => $body,
            $crate::data_repr::ArrayData::Int16($v) => $body,
            $crate::data_repr::ArrayData::Int32($v) => $body,
            $crate::data_repr::ArrayData::Int64($v) => $body,
            $crate::data_repr::ArrayData::UInt8($v) => $body,
            $crate::data_repr::ArrayData::UInt16($v) => $body,
            $crate::data_repr::ArrayData::UInt32($v) => $body,
            $crate::data_repr::ArrayData::UInt64($v) => $body,
            $crate::data_repr::ArrayData::Float32($v) => $body,
            $crate::data_repr::ArrayData::Float64($v) => $body,
            $crate::data_repr::ArrayData::String($v) => $body,
        }
    };
}

/// Run `$body` with the type alias `$E` naming the element type selected by
/// an `ArrayType` value.
macro_rules! for_each_type {
    ($ty:expr, $E:ident => $body:expr) => {
        match $ty {
            $crate::ArrayType::Int8 => { type $E = i8; $body }
            $crate::ArrayType::Int16 => { type $E = i16; $body }
            $crate::ArrayType::Int32 => { type $E = i32; $body }
            $crate::ArrayType::Int64 => { type $E = i64; $body }
            $crate::ArrayType::UInt8 => { type $E = u8; $body }
            $crate::ArrayType::UInt16 => { type $E = u16; $body }
            $crate::ArrayType::UInt32 => { type $E = u32; $body }
            $crate::ArrayType::UInt64 => { type $E = u64; $body }
            $crate::ArrayType::Float32 => { type $E = f32; $body }
            $crate::ArrayType::Float64 => { type $E = f64; $body }
            $crate::ArrayType::String => { type $E = ::std::string::String; $body }
        }
    };
}
