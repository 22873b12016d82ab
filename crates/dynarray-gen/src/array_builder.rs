// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use dynarray::{ArrayType, TypedArray};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Vec<usize>,
    array_type: ArrayType,
    generator: ElementGenerator,
    name: String,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// `0, 1, 2, ...` converted to the element type
    Sequential,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(&[1])
    }
}

impl ArrayBuilder
{
    pub fn new(dim: &[usize]) -> Self
    {
        ArrayBuilder {
            dim: dim.to_vec(),
            array_type: ArrayType::Int32,
            generator: ElementGenerator::Sequential,
            name: String::new(),
        }
    }

    pub fn array_type(mut self, array_type: ArrayType) -> Self
    {
        self.array_type = array_type;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn name(mut self, name: &str) -> Self
    {
        self.name = name.to_string();
        self
    }

    /// Build the array.
    ///
    /// **Panics** if the shape is invalid.
    pub fn build(self) -> TypedArray
    {
        let mut array = TypedArray::new();
        array
            .initialize_with_shape(self.array_type, &self.dim)
            .unwrap();
        if self.generator == ElementGenerator::Sequential {
            let values: Vec<u64> = (0..array.size() as u64).collect();
            array.insert_values(0, &values).unwrap();
        }
        array.set_name(self.name);
        array
    }
}

#[test]
fn test_sequential()
{
    let a = ArrayBuilder::new(&[3, 4])
        .array_type(ArrayType::Float32)
        .build();
    assert_eq!(a.dimensions(), vec![3, 4]);
    assert_eq!(a.array_type(), Some(ArrayType::Float32));
    assert_eq!(a.get_value::<f32>(11).unwrap(), 11.);

    let z = ArrayBuilder::new(&[5])
        .generator(ElementGenerator::Zero)
        .name("zeros")
        .build();
    assert_eq!(z.values_string().unwrap(), "0 0 0 0 0");
    assert_eq!(z.name(), "zeros");
}

#[test]
fn test_text_sequence()
{
    let s = ArrayBuilder::new(&[3])
        .array_type(ArrayType::String)
        .build();
    assert_eq!(s.values_string().unwrap(), "0 1 2");
}
