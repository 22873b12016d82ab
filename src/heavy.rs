// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazily materialized ("heavy") array content.
//!
//! A `TypedArray` may be bound to a `HeavyDataController`, which knows the
//! declared type and shape of some external content and can load it on
//! request. The array reports itself as not initialized until
//! `TypedArray::read` has pulled the content in.

use std::fmt;

use crate::array_type::ArrayType;
use crate::dimension;
use crate::error::HeavyReadSource;
use crate::TypedArray;

/// Provider of content for arrays that are not resident in memory.
///
/// Controllers are shared (`Arc<dyn HeavyDataController>`) between every
/// array that views the same external resource. `read` takes `&self`; a
/// controller touching shared state must do its own synchronization.
pub trait HeavyDataController: fmt::Debug + Send + Sync {
    /// Name of the backing format, reported as the `Format` item property.
    fn name(&self) -> &str;

    /// Declared element type of the content.
    fn array_type(&self) -> ArrayType;

    /// Declared shape of the content.
    fn dimensions(&self) -> Vec<usize>;

    /// Declared number of elements.
    fn size(&self) -> usize {
        dimension::size_of_shape(&self.dimensions())
    }

    /// Materialize the content as a resident array.
    ///
    /// Called at most once per `TypedArray::read`; errors are handed to
    /// the caller unchanged.
    fn read(&self) -> Result<TypedArray, HeavyReadSource>;
}

/// Controller serving content kept as whitespace separated text.
///
/// This is the inline form of heavy data: the values are known but kept
/// unparsed until first use.
#[derive(Clone, Debug)]
pub struct TextController {
    array_type: ArrayType,
    dimensions: Vec<usize>,
    text: String,
}

impl TextController {
    pub fn new(array_type: ArrayType, dimensions: Vec<usize>, text: impl Into<String>) -> Self {
        TextController {
            array_type,
            dimensions,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl HeavyDataController for TextController {
    fn name(&self) -> &str {
        "XML"
    }

    fn array_type(&self) -> ArrayType {
        self.array_type
    }

    fn dimensions(&self) -> Vec<usize> {
        self.dimensions.clone()
    }

    fn read(&self) -> Result<TypedArray, HeavyReadSource> {
        Ok(TypedArray::parse(self.array_type, &self.dimensions, &self.text)?)
    }
}
