// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

use crate::data_repr::ArrayData;
use crate::dimension::size_of_shape_checked;
use crate::{ArrayType, Element, TypedArray};

/// Format version written as the `v` field.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        return Err(de::Error::custom(err_msg));
    }
    Ok(())
}

/// **Requires crate feature `"serde"`**
///
/// Serialized as a struct `{ v, type, dim, name, data }`. An array whose
/// content is not resident cannot be serialized; `read` it first.
impl Serialize for TypedArray {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        if self.is_pending() {
            return Err(ser::Error::custom("array content is not resident; read it before serializing"));
        }
        let mut state = serializer.serialize_struct("TypedArray", 5)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("type", &self.array_type)?;
        state.serialize_field("dim", &self.dimensions())?;
        state.serialize_field("name", &self.name)?;
        match self.data {
            Some(ref data) => for_each_data!(data, v => state.serialize_field("data", v))?,
            None => state.serialize_field("data", &[] as &[u8])?,
        }
        state.end()
    }
}

/// Deserializes the `data` field once the element type is known.
struct DataSeed(Option<ArrayType>);

impl<'de> DeserializeSeed<'de> for DataSeed {
    type Value = Option<ArrayData>;

    fn deserialize<D>(self, deserializer: D) -> Result<Option<ArrayData>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Some(array_type) => for_each_type!(array_type, E => {
                Vec::<E>::deserialize(deserializer).map(|v| Some(<E as Element>::into_data(v)))
            }),
            None => {
                let values = Vec::<IgnoredAny>::deserialize(deserializer)?;
                if values.is_empty() {
                    Ok(None)
                } else {
                    Err(de::Error::invalid_length(values.len(), &"no elements for an untyped array"))
                }
            }
        }
    }
}

enum ArrayField {
    Version,
    Type,
    Dim,
    Name,
    Data,
}

static ARRAY_FIELDS: &[&str] = &["v", "type", "dim", "name", "data"];

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "type", "dim", "name", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "type" => Ok(ArrayField::Type),
                    "dim" => Ok(ArrayField::Dim),
                    "name" => Ok(ArrayField::Name),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"type" => Ok(ArrayField::Type),
                    b"dim" => Ok(ArrayField::Dim),
                    b"name" => Ok(ArrayField::Name),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(&format!("{:?}", other), ARRAY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

/// Put the decoded parts together, checking the shape against the data.
fn build<E>(array_type: Option<ArrayType>, dim: Vec<usize>, name: String, data: Option<ArrayData>)
    -> Result<TypedArray, E>
where
    E: de::Error,
{
    let len = data.as_ref().map_or(0, ArrayData::len);
    let matches = match dim.as_slice() {
        [n] => *n == len,
        _ => size_of_shape_checked(&dim).map_or(false, |size| size == len),
    };
    if !matches {
        return Err(de::Error::custom("data and dimension must match in size"));
    }
    Ok(TypedArray {
        dimensions: if dim.len() == 1 { Vec::new() } else { dim },
        size: len,
        name,
        array_type: array_type.filter(|_| data.is_some()),
        data,
        ..TypedArray::new()
    })
}

struct ArrayVisitor;

impl<'de> Visitor<'de> for ArrayVisitor {
    type Value = TypedArray;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("dynarray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<TypedArray, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        verify_version(v)?;

        let array_type: Option<ArrayType> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };

        let dim: Vec<usize> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(2, &self)),
        };

        let name: String = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(3, &self)),
        };

        let data = match visitor.next_element_seed(DataSeed(array_type))? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(4, &self)),
        };

        build(array_type, dim, name, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<TypedArray, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut array_type: Option<Option<ArrayType>> = None;
        let mut dim: Option<Vec<usize>> = None;
        let mut name: Option<String> = None;
        let mut data: Option<Option<ArrayData>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Type => {
                    array_type = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
                ArrayField::Name => {
                    name = Some(visitor.next_value()?);
                }
                ArrayField::Data => {
                    let ty = match array_type {
                        Some(ty) => ty,
                        None => return Err(de::Error::custom("field `type` must precede `data`")),
                    };
                    data = Some(visitor.next_value_seed(DataSeed(ty))?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let array_type = array_type.ok_or_else(|| de::Error::missing_field("type"))?;
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;

        build(array_type, dim, name.unwrap_or_default(), data)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for TypedArray {
    fn deserialize<D>(deserializer: D) -> Result<TypedArray, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("TypedArray", ARRAY_FIELDS, ArrayVisitor)
    }
}
