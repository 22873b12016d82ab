// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use crate::error::{from_kind, ArrayError, ErrorKind};

/// The element type stored by a `TypedArray`.
///
/// A `TypedArray` holds exactly one of these at a time; the type is chosen
/// by `initialize` or inferred from the first inserted value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
}

impl ArrayType {
    /// All supported element types.
    pub const ALL: [ArrayType; 11] = [
        ArrayType::Int8,
        ArrayType::Int16,
        ArrayType::Int32,
        ArrayType::Int64,
        ArrayType::UInt8,
        ArrayType::UInt16,
        ArrayType::UInt32,
        ArrayType::UInt64,
        ArrayType::Float32,
        ArrayType::Float64,
        ArrayType::String,
    ];

    /// Size in bytes of one element. Text elements report `0`, since they
    /// have no fixed width.
    pub fn precision(self) -> usize {
        match self {
            ArrayType::Int8 | ArrayType::UInt8 => 1,
            ArrayType::Int16 | ArrayType::UInt16 => 2,
            ArrayType::Int32 | ArrayType::UInt32 | ArrayType::Float32 => 4,
            ArrayType::Int64 | ArrayType::UInt64 | ArrayType::Float64 => 8,
            ArrayType::String => 0,
        }
    }

    /// The data type family name, as written in item properties.
    ///
    /// Several types share a family and are told apart by `precision`.
    pub fn name(self) -> &'static str {
        match self {
            ArrayType::Int8 => "Char",
            ArrayType::Int16 => "Short",
            ArrayType::Int32 | ArrayType::Int64 => "Int",
            ArrayType::UInt8 => "UChar",
            ArrayType::UInt16 => "UShort",
            ArrayType::UInt32 | ArrayType::UInt64 => "UInt",
            ArrayType::Float32 | ArrayType::Float64 => "Float",
            ArrayType::String => "String",
        }
    }

    /// Look up a type from its family name and precision.
    ///
    /// ***Errors*** with `InvalidType` if the pair does not name a
    /// supported type.
    pub fn from_properties(name: &str, precision: usize) -> Result<ArrayType, ArrayError> {
        let ty = match (name, precision) {
            ("Char", 1) => ArrayType::Int8,
            ("Short", 2) => ArrayType::Int16,
            ("Int", 4) => ArrayType::Int32,
            ("Int", 8) => ArrayType::Int64,
            ("UChar", 1) => ArrayType::UInt8,
            ("UShort", 2) => ArrayType::UInt16,
            ("UInt", 4) => ArrayType::UInt32,
            ("UInt", 8) => ArrayType::UInt64,
            ("Float", 4) => ArrayType::Float32,
            ("Float", 8) => ArrayType::Float64,
            ("String", _) => ArrayType::String,
            _ => return Err(from_kind(ErrorKind::InvalidType)),
        };
        Ok(ty)
    }

    /// `DataType` and `Precision` property pairs describing this type.
    pub fn properties(self) -> [(&'static str, String); 2] {
        [
            ("DataType", self.name().to_string()),
            ("Precision", self.precision().to_string()),
        ]
    }

    /// Return `true` for the integer and floating point types.
    pub fn is_numeric(self) -> bool {
        self != ArrayType::String
    }

    fn label(self) -> &'static str {
        match self {
            ArrayType::Int8 => "Int8",
            ArrayType::Int16 => "Int16",
            ArrayType::Int32 => "Int32",
            ArrayType::Int64 => "Int64",
            ArrayType::UInt8 => "UInt8",
            ArrayType::UInt16 => "UInt16",
            ArrayType::UInt32 => "UInt32",
            ArrayType::UInt64 => "UInt64",
            ArrayType::Float32 => "Float32",
            ArrayType::Float64 => "Float64",
            ArrayType::String => "String",
        }
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses labels like `"Int32"` or `"float64"` (case-insensitive).
impl FromStr for ArrayType {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrayType::ALL
            .iter()
            .copied()
            .find(|ty| ty.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| from_kind(ErrorKind::InvalidType))
    }
}
